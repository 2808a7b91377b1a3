mod derived;
#[cfg(feature = "parse")]
mod parse;
