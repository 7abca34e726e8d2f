use georeg_derive::georeg_error;
use std::borrow::Cow;

#[georeg_error]
pub enum DemoError {
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u64, DemoError> {
    raw.parse::<u64>().context("parsing identifier")
}

fn main() {
    let _ = parse("7");
}
