//! Public API for suppression handling

pub use crate::suppression::lexer::{lex_lines, LexedLine};
pub use crate::suppression::resolver::is_wholly_suppressed;
pub use crate::suppression::scanner::{scan, scan_lines};
pub use crate::suppression::types::{RuleSelector, SuppressionDirective, SuppressionSet};
