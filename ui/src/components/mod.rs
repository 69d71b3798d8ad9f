pub mod ad_card;
pub mod form_field;
pub mod image_staging_grid;
pub mod layout;
pub mod login_form;
pub mod pagination;
pub mod require_auth;
pub mod toast;
pub mod wizard_tabs;

pub use ad_card::AdCard;
pub use form_field::{
    CheckboxField, FormHandle, NumberField, SelectField, TextAreaField, TextField,
};
pub use image_staging_grid::ImageStagingGrid;
pub use login_form::LoginForm;
pub use pagination::Pagination;
pub use require_auth::RequireAuth;
pub use toast::ToastContainer;
pub use wizard_tabs::WizardTabs;
