//! Validation Error Types

use thiserror::Error;

/// Errors during answer validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Wrong number of answers
    #[error("Entrada inválida. Esperava {expected} respostas, mas recebi {actual}.")]
    WrongAnswerCount { expected: usize, actual: usize },

    /// Answer outside the configured scale
    #[error("Entrada inválida. A resposta {index} vale {value}, fora do intervalo permitido [{min}, {max}].")]
    OutOfRange {
        index: usize,
        value: i64,
        min: i64,
        max: i64,
    },
}
