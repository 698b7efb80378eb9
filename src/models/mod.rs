pub mod form;
pub mod loaders;
pub mod payload;
pub mod response;

pub use form::{Attachment, FormInput};
pub use loaders::load_form_from_toml;
pub use payload::{JsonSubmission, MultipartSubmission, SubmissionPayload};
pub use response::{GradeValue, GradedReply, RawResponse, ServerResponse};
