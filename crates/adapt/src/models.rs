//! These models represent what the interpretation pipeline hands to its consumers
//!
//! A model reply is an unstructured blob of text. Depending on the call site it is
//! turned into one of two shapes:
//! - a sequence of chat blocks (code, heading, paragraph) for the assistant chat
//! - a pair of artifacts (markup and stylesheet) for the code transformer
//!
//! Every value here is created fresh per call and carries no identity beyond it,
//! except for history records which are stamped with their creation time.
pub mod block;
pub mod language;
pub mod transform;
