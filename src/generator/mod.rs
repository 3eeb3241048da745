pub mod composer;

use std::str::FromStr;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::engine::parser::leading_integer;
use crate::engine::record::VocabularyRecord;
use crate::error::QuizError;

/// Which side of a record is shown as the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    FrontToBack,
    BackToFront,
}

impl Direction {
    pub fn prompt(self, record: &VocabularyRecord) -> &str {
        match self {
            Direction::FrontToBack => &record.front,
            Direction::BackToFront => &record.back,
        }
    }

    pub fn answer(self, record: &VocabularyRecord) -> &str {
        match self {
            Direction::FrontToBack => &record.back,
            Direction::BackToFront => &record.front,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionMode {
    FrontToBack,
    BackToFront,
    Mixed,
}

impl DirectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DirectionMode::FrontToBack => "front-to-back",
            DirectionMode::BackToFront => "back-to-front",
            DirectionMode::Mixed => "mixed",
        }
    }
}

impl FromStr for DirectionMode {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "front-to-back" => Ok(DirectionMode::FrontToBack),
            "back-to-front" => Ok(DirectionMode::BackToFront),
            "mixed" => Ok(DirectionMode::Mixed),
            other => Err(QuizError::InvalidParameter {
                name: "direction mode",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestItem {
    /// 1-based position in the test.
    pub ordinal: usize,
    pub record: Arc<VocabularyRecord>,
    pub direction: Direction,
}

impl TestItem {
    pub fn prompt(&self) -> &str {
        self.direction.prompt(&self.record)
    }

    pub fn answer(&self) -> &str {
        self.direction.answer(&self.record)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionCriteria {
    pub start_num: i64,
    pub end_num: i64,
    pub question_count: usize,
    pub direction_mode: DirectionMode,
}

impl SelectionCriteria {
    /// Build criteria from raw form values.
    ///
    /// Bounds are read like record numbers (integer prefix, rest ignored).
    /// Bounds without an integer prefix select nothing (the range is inverted),
    /// so the request later fails as insufficient data. The count must be a
    /// positive integer.
    pub fn from_inputs(
        start: &str,
        end: &str,
        count: &str,
        mode: &str,
    ) -> Result<Self, QuizError> {
        let bounds = leading_integer(start).zip(leading_integer(end));
        let (start_num, end_num) = bounds.unwrap_or((1, 0));

        let question_count = match count.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(QuizError::InvalidParameter {
                    name: "question count",
                    value: count.to_string(),
                });
            }
        };

        Ok(Self {
            start_num,
            end_num,
            question_count,
            direction_mode: mode.parse()?,
        })
    }
}
