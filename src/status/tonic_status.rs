//! [`WireStatus`] for `tonic::Status`, with details encoded as `google.rpc.ErrorInfo`.

use super::{AttachError, WireStatus};
use crate::types::{ErrorInfo, StatusCode};
use std::collections::HashMap;
use tonic_types::{ErrorDetails, StatusExt};

impl WireStatus for tonic::Status {
    fn from_parts(code: StatusCode, message: String) -> Self {
        tonic::Status::new(tonic::Code::from_i32(code.as_i32()), message)
    }

    fn with_details(&self, details: &ErrorInfo) -> Result<Self, AttachError> {
        if self.code() == tonic::Code::Ok {
            return Err(AttachError::OkStatus);
        }

        let metadata: HashMap<String, String> =
            details.metadata.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let error_details = ErrorDetails::with_error_info(details.reason.clone(), "", metadata);

        Ok(<tonic::Status as StatusExt>::with_error_details(
            self.code(),
            self.message(),
            error_details,
        ))
    }
}
