//! Wire shapes of the upstream catalog/test/user API.
//!
//! The backend serves Mongo-style documents: `_id` identifiers, camelCase
//! fields, RFC 3339 timestamps. These DTOs decode that shape and convert it
//! into validated core models; nothing outside this module touches the wire
//! layout.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use prep_core::model::{
    CreatorRef, Question, QuestionId, QuestionOption, SeriesId, SeriesRecord, TestId, TestRef,
    UserId,
};

use crate::error::FeedError;
use crate::quiz::TestRecord;

//
// ─── SERIES FEED ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesFeed {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub tests: Vec<TestRefFeed>,
    pub created_by: CreatorFeed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestRefFeed {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatorFeed {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl SeriesFeed {
    /// Convert the wire record into the validated domain model.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Series` when the record fails model validation.
    pub fn into_record(self) -> Result<SeriesRecord, FeedError> {
        let tests = self
            .tests
            .into_iter()
            .map(|t| TestRef::new(TestId::new(t.id), t.title))
            .collect();

        Ok(SeriesRecord::new(
            SeriesId::new(self.id),
            self.title,
            self.description,
            self.image,
            self.price,
            self.start_date,
            self.end_date,
            tests,
            CreatorRef::new(UserId::new(self.created_by.id), self.created_by.name),
        )?)
    }
}

/// Decode a full series feed payload into domain records.
///
/// # Errors
///
/// Returns `FeedError::Json` for malformed JSON and `FeedError::Series` for
/// records that fail model validation.
pub fn parse_series_feed(json: &str) -> Result<Vec<SeriesRecord>, FeedError> {
    let items: Vec<SeriesFeed> = serde_json::from_str(json)?;
    items.into_iter().map(SeriesFeed::into_record).collect()
}

//
// ─── TEST FEED ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFeed {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub questions: Vec<QuestionFeed>,
    #[serde(default)]
    pub is_example: bool,
    #[serde(default)]
    pub price: u32,
    /// Duration in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub passing_score: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFeed {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(alias = "questionText")]
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub options: Vec<OptionFeed>,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionFeed {
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
}

impl QuestionFeed {
    /// Convert the wire question into the validated domain model.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Question` when the question fails model validation.
    pub fn into_question(self) -> Result<Question, FeedError> {
        let options = self
            .options
            .into_iter()
            .map(|o| {
                let mut option = QuestionOption::new(o.text, o.is_correct);
                option.image = o.image;
                option
            })
            .collect();

        Ok(Question::new(
            QuestionId::new(self.id),
            self.text,
            self.image,
            options,
            self.explanation,
        )?)
    }
}

impl TestFeed {
    /// Convert the wire test into the validated domain model.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Question` when an embedded question fails model
    /// validation.
    pub fn into_record(self) -> Result<TestRecord, FeedError> {
        let questions = self
            .questions
            .into_iter()
            .map(QuestionFeed::into_question)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TestRecord {
            id: TestId::new(self.id),
            title: self.title,
            description: self.description,
            instructions: self.instructions,
            questions,
            is_example: self.is_example,
            price: self.price,
            duration_minutes: self.duration,
            passing_score: self.passing_score,
        })
    }
}

/// Decode a demo-test feed payload into domain records.
///
/// # Errors
///
/// Returns `FeedError::Json` for malformed JSON and `FeedError::Question` for
/// embedded questions that fail model validation.
pub fn parse_test_feed(json: &str) -> Result<Vec<TestRecord>, FeedError> {
    let items: Vec<TestFeed> = serde_json::from_str(json)?;
    items.into_iter().map(TestFeed::into_record).collect()
}

//
// ─── USER FEED ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFeed {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub total_tests_given: u32,
    #[serde(default)]
    pub total_series_joined: u32,
    #[serde(default)]
    pub total_marks_obtained: u32,
    #[serde(default)]
    pub tests_given: Vec<TestGivenFeed>,
    #[serde(default)]
    pub series_joined: Vec<SeriesJoinedFeed>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGivenFeed {
    pub test_id: TestRefFeed,
    pub score: u32,
    pub total_marks: u32,
    #[serde(default)]
    pub time_taken: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesJoinedFeed {
    pub series_id: SeriesRefFeed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesRefFeed {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Decode a user document payload.
///
/// # Errors
///
/// Returns `FeedError::Json` for malformed JSON.
pub fn parse_user_feed(json: &str) -> Result<UserFeed, FeedError> {
    Ok(serde_json::from_str(json)?)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_feed_decodes_backend_shape() {
        let json = r#"[{
            "_id": "66a1f0",
            "title": "NEET 2024 Full Series",
            "description": "20 full-length mocks",
            "image": "https://cdn.example/neet.png",
            "price": 499,
            "startDate": "2024-01-01T00:00:00Z",
            "endDate": "2024-01-31T00:00:00Z",
            "tests": [{"_id": "t1", "title": "Mock 1"}],
            "createdBy": {"_id": "u9", "name": "Allen"}
        }]"#;

        let records = parse_series_feed(json).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.id(), &SeriesId::new("66a1f0"));
        assert_eq!(record.title(), "NEET 2024 Full Series");
        assert_eq!(record.price(), 499);
        assert_eq!(record.test_count(), 1);
        assert_eq!(record.created_by().name, "Allen");
    }

    #[test]
    fn series_feed_rejects_blank_title() {
        let json = r#"[{
            "_id": "s1",
            "title": "   ",
            "price": 0,
            "startDate": "2024-01-01T00:00:00Z",
            "endDate": "2024-01-31T00:00:00Z",
            "createdBy": {"_id": "u1", "name": "X"}
        }]"#;

        let err = parse_series_feed(json).unwrap_err();
        assert!(matches!(err, FeedError::Series(_)));
    }

    #[test]
    fn series_feed_rejects_malformed_json() {
        let err = parse_series_feed("not json").unwrap_err();
        assert!(matches!(err, FeedError::Json(_)));
    }

    #[test]
    fn test_feed_decodes_embedded_questions() {
        let json = r#"[{
            "_id": "demo1",
            "title": "Demo: Kinematics",
            "description": "warm-up",
            "instructions": ["No negative marking"],
            "isExample": true,
            "price": 0,
            "duration": 15,
            "questions": [{
                "_id": "q1",
                "questionText": "v = u + at. Find v for u=0, a=2, t=3.",
                "options": [
                    {"text": "6 m/s", "isCorrect": true},
                    {"text": "5 m/s"}
                ],
                "explanation": "Substitute directly."
            }]
        }]"#;

        let tests = parse_test_feed(json).unwrap();
        assert_eq!(tests.len(), 1);

        let test = &tests[0];
        assert!(test.is_example);
        assert!(test.is_free());
        assert_eq!(test.duration_minutes, Some(15));
        assert_eq!(test.question_count(), 1);

        let question = &test.questions[0];
        assert_eq!(question.correct_option(), Some(0));
        assert_eq!(question.explanation(), Some("Substitute directly."));
    }

    #[test]
    fn user_feed_decodes_profile_document() {
        let json = r#"{
            "_id": "u42",
            "fullName": "Asha Verma",
            "phone": "9876500000",
            "goal": "NEET 2025",
            "totalTestsGiven": 2,
            "totalSeriesJoined": 1,
            "totalMarksObtained": 87,
            "testsGiven": [
                {"testId": {"_id": "t1", "title": "Mock 1"}, "score": 44, "totalMarks": 50, "timeTaken": "38m"}
            ],
            "seriesJoined": [
                {"seriesId": {"_id": "s1", "name": "NEET Full Series"}}
            ]
        }"#;

        let user = parse_user_feed(json).unwrap();
        assert_eq!(user.full_name, "Asha Verma");
        assert_eq!(user.total_marks_obtained, 87);
        assert_eq!(user.tests_given.len(), 1);
        assert_eq!(user.tests_given[0].test_id.title, "Mock 1");
        assert_eq!(user.series_joined[0].series_id.name, "NEET Full Series");
        assert_eq!(user.referral_code, None);
    }
}
