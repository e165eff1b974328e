use error_stamp::status::{grpc_error, project, AttachError, Status, WireStatus};
use error_stamp::types::{CoreRef, ErrorInfo};
use error_stamp::{labels, Code, CoreRecord, Formatter, Mapper, StatusCode};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

const SYSTEM_KEYS: usize = 4;

fn formatter_with(record: CoreRecord) -> Formatter {
    let core: CoreRef = Arc::new(record);
    Formatter::builder()
        .lookup(Mapper::new(Code::UNKNOWN, HashMap::from([(Code::UNKNOWN, core)])))
        .build()
        .unwrap()
}

#[test]
fn non_system_error_projects_to_unknown_without_details() {
    let status = grpc_error(&std::io::Error::other("example error"));

    assert_eq!(status.code(), StatusCode::Unknown);
    assert_eq!(status.message(), "example error");
    assert!(status.details().is_empty());
}

#[test]
fn record_without_status_capability_degrades_to_unknown() {
    let formatter = formatter_with(CoreRecord::new(Code(100), "custom", "custom core error"));

    let err = formatter.new_error(Some("example error".into()), Code(100), []);
    let status = err.grpc();

    assert_eq!(status.code(), StatusCode::Unknown);
    assert_eq!(status.message(), "error: custom(100) - example error");
    assert!(status.details().is_empty());
}

#[test]
fn system_error_carries_code_message_and_details() {
    let formatter = Formatter::default().with_labels(labels!("testcase" => "t1"));
    let err = formatter.new_error(None, Code::INTERNAL, labels!("key1" => "val1", "key2" => 2));

    let status = err.grpc();
    assert_eq!(status.code(), StatusCode::Internal);
    assert_eq!(status.message(), err.to_string());
    assert_eq!(status.details().len(), 1);

    let detail = &status.details()[0];
    assert_eq!(detail.reason, "INTERNAL");
    assert_eq!(detail.metadata.len() - SYSTEM_KEYS - 1, 2);
    assert_eq!(detail, err.details());
}

#[test]
fn default_table_codes_project_to_their_status() {
    let formatter = Formatter::default();
    let expected = [
        (Code::UNKNOWN, StatusCode::Unknown),
        (Code::NOT_FOUND, StatusCode::NotFound),
        (Code::THRESHOLD, StatusCode::OutOfRange),
        (Code::UNAUTHORIZED, StatusCode::Unauthenticated),
        (Code::EXTERNAL_REQUEST, StatusCode::Internal),
        (Code(999), StatusCode::Unknown),
    ];

    for (code, status) in expected {
        let projected = formatter.new_error(None, code, []).grpc();
        assert_eq!(projected.code(), status, "{code}");
        assert_eq!(projected.details().len(), 1, "{code}");
    }
}

#[test]
fn attach_failure_falls_back_to_status_without_details() {
    let formatter = formatter_with(
        CoreRecord::new(Code::UNKNOWN, "fine", "all good").with_status(StatusCode::Ok),
    );

    let status = formatter.new_error(None, Code::UNKNOWN, []).grpc();

    assert_eq!(status.code(), StatusCode::Ok);
    assert_eq!(status.message(), "error: fine(1) - all good");
    assert!(status.details().is_empty());
}

#[test]
fn builtin_status_refuses_details_on_ok() {
    let ok = Status::new(StatusCode::Ok, "fine");
    assert_eq!(ok.with_details(&ErrorInfo::default()), Err(AttachError::OkStatus));

    let failed = Status::new(StatusCode::Aborted, "retry");
    let detailed = failed.with_details(&ErrorInfo::default()).unwrap();
    assert_eq!(detailed.details().len(), 1);
    assert!(failed.details().is_empty());
}

#[test]
fn wrapped_system_error_is_found_through_source_chain() {
    #[derive(Debug)]
    struct Wrapper(error_stamp::GeneralError);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped: {}", self.0)
        }
    }

    impl Error for Wrapper {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    let inner = Formatter::default().new_error(None, Code::NOT_FOUND, []);
    let status = grpc_error(&Wrapper(inner.clone()));

    assert_eq!(status.code(), StatusCode::NotFound);
    assert_eq!(status.message(), inner.to_string());
    assert_eq!(status.details().len(), 1);
}

/// Sink that never accepts details.
#[derive(Debug, PartialEq)]
struct Plain {
    code: StatusCode,
    message: String,
    detailed: bool,
}

impl WireStatus for Plain {
    fn from_parts(code: StatusCode, message: String) -> Self {
        Self { code, message, detailed: false }
    }

    fn with_details(&self, _details: &ErrorInfo) -> Result<Self, AttachError> {
        Err(AttachError::OkStatus)
    }
}

#[test]
fn custom_sink_receives_projection() {
    let err = Formatter::default().new_error(Some("denied".into()), Code::UNAUTHORIZED, []);

    let plain: Plain = err.status();
    assert_eq!(
        plain,
        Plain {
            code: StatusCode::Unauthenticated,
            message: "error: unauthorized(8) - denied".into(),
            detailed: false,
        }
    );

    let generic: Plain = project(&std::io::Error::other("io"));
    assert_eq!(generic.code, StatusCode::Unknown);
    assert_eq!(generic.message, "io");
}

#[test]
fn status_display_and_error() {
    let status = Status::new(StatusCode::NotFound, "gone");
    let as_error: &dyn Error = &status;

    assert_eq!(as_error.to_string(), "status: NOT_FOUND, message: \"gone\"");
}

#[cfg(feature = "tonic")]
#[test]
fn tonic_status_carries_error_info() {
    use tonic_types::StatusExt;

    let err = Formatter::default().new_error(None, Code::NOT_FOUND, labels!("user" => 7));
    let status: tonic::Status = err.status();

    assert_eq!(status.code(), tonic::Code::NotFound);
    assert_eq!(status.message(), err.to_string());
    let info = status.get_details_error_info().unwrap();
    assert_eq!(info.reason, "NOT-FOUND");
    assert_eq!(info.metadata["user"], "7");
}
