//! Display-only aggregation of the learner's profile document.
//!
//! The totals here reflect server-provided aggregates verbatim; this module
//! performs no independent computation beyond reshaping rows for display.

use prep_core::model::{Score, SeriesId, TestId, UserId};

use crate::feed::UserFeed;

/// Row for one finished test on the profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResultItem {
    pub test_id: TestId,
    pub title: String,
    pub score: Score,
    /// Server-formatted duration string, shown as-is.
    pub time_taken: String,
}

/// Row for one joined series on the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesJoinedItem {
    pub series_id: SeriesId,
    pub name: String,
}

/// Presentation-agnostic profile dashboard data.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOverview {
    pub user_id: UserId,
    pub full_name: String,
    pub phone: String,
    pub goal: Option<String>,
    pub referral_code: Option<String>,
    pub total_tests_given: u32,
    pub total_series_joined: u32,
    pub total_marks_obtained: u32,
    pub tests_given: Vec<TestResultItem>,
    pub series_joined: Vec<SeriesJoinedItem>,
}

impl ProfileOverview {
    /// Reshape the user document for display, preserving row order.
    #[must_use]
    pub fn from_feed(feed: &UserFeed) -> Self {
        let tests_given = feed
            .tests_given
            .iter()
            .map(|given| TestResultItem {
                test_id: TestId::new(given.test_id.id.clone()),
                title: given.test_id.title.clone(),
                score: Score::new(
                    usize::try_from(given.score).unwrap_or(usize::MAX),
                    usize::try_from(given.total_marks).unwrap_or(usize::MAX),
                ),
                time_taken: given.time_taken.clone(),
            })
            .collect();

        let series_joined = feed
            .series_joined
            .iter()
            .map(|joined| SeriesJoinedItem {
                series_id: SeriesId::new(joined.series_id.id.clone()),
                name: joined.series_id.name.clone(),
            })
            .collect();

        Self {
            user_id: UserId::new(feed.id.clone()),
            full_name: feed.full_name.clone(),
            phone: feed.phone.clone(),
            goal: feed.goal.clone(),
            referral_code: feed.referral_code.clone(),
            total_tests_given: feed.total_tests_given,
            total_series_joined: feed.total_series_joined,
            total_marks_obtained: feed.total_marks_obtained,
            tests_given,
            series_joined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::parse_user_feed;

    #[test]
    fn overview_reflects_server_aggregates_verbatim() {
        let json = r#"{
            "_id": "u42",
            "fullName": "Asha Verma",
            "phone": "9876500000",
            "referralCode": "ASHA10",
            "totalTestsGiven": 7,
            "totalSeriesJoined": 3,
            "totalMarksObtained": 412,
            "testsGiven": [
                {"testId": {"_id": "t1", "title": "Mock 1"}, "score": 44, "totalMarks": 50, "timeTaken": "38m"},
                {"testId": {"_id": "t2", "title": "Mock 2"}, "score": 31, "totalMarks": 50, "timeTaken": "41m"}
            ],
            "seriesJoined": [
                {"seriesId": {"_id": "s1", "name": "NEET Full Series"}}
            ]
        }"#;

        let overview = ProfileOverview::from_feed(&parse_user_feed(json).unwrap());

        // Totals come from the server even when they disagree with the rows.
        assert_eq!(overview.total_tests_given, 7);
        assert_eq!(overview.tests_given.len(), 2);

        assert_eq!(overview.full_name, "Asha Verma");
        assert_eq!(overview.goal, None);
        assert_eq!(overview.referral_code.as_deref(), Some("ASHA10"));
        assert_eq!(overview.tests_given[0].score.to_string(), "44 / 50");
        assert_eq!(overview.tests_given[0].time_taken, "38m");
        assert_eq!(overview.series_joined[0].name, "NEET Full Series");
    }
}
