use std::borrow::Cow;

/// Failures of the type-erased class surface.
///
/// Typed class definitions never fail; only moving payloads in and out of JSON can.
#[georeg_derive::georeg_error]
pub enum ClassError {
    #[error("Payload decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Unknown item class{}: {class_id}", format_context(.context))]
    UnknownClass { class_id: String, context: Option<Cow<'static, str>> },

    #[error("Internal class error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
