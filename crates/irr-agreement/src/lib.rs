//! Inter-rater agreement statistics for two raters.
//!
//! Two chance-naive and chance-corrected measures over a pair of rating
//! sequences collected from the same items: simple percentage agreement
//! ([`percentage_agreement`]) and Bennett's S score ([`bennetts_s_score`]),
//! which corrects percentage agreement for the number of possible labels.
//!
//! Both functions are pure and hold no state; calling them concurrently is
//! safe as long as the caller does not mutate the inputs during the call.

pub mod agreement;
pub mod error;

pub use agreement::{bennetts_s_score, percentage_agreement};
pub use error::{AgreementError, Result};
