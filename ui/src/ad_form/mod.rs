//! Core of the ad-creation form, kept free of rendering concerns.

pub mod browser;
pub mod form_store;
pub mod staging;
pub mod submission;
pub mod wizard;

pub use form_store::{FormAction, FormStore, number_input};
pub use staging::{ImageFile, ImageStaging, PreviewUrls, RejectedFiles, StagedImage};
pub use submission::{
    AdService, Notification, NotificationVariant, Notifier, ServiceError,
    SubmissionPipeline, SubmitError,
};
pub use wizard::{Blocked, GatePolicy, Wizard, WizardSection};
