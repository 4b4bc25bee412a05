//! The multi-step lead intake form.
//!
//! - **form**: raw field values and their wire names
//! - **steps**: the rules that gate each step
//! - **wizard**: per-session step state and submission

pub mod form;
pub mod steps;
pub mod wizard;

pub use form::{ContactChannel, FormField, LeadForm};
pub use steps::{
    check_all_steps, validate_step, FormStep, StepOutcome, StepRules,
    DEFAULT_MIN_DESCRIPTION_CHARS,
};
pub use wizard::{FormWizard, LeadSubmission, LookupRequest, DEFAULT_ORIGIN};
