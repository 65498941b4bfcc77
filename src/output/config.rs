use std::env;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl OutputConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var("DIGEST_OUTPUT_PRETTY").ok().as_deref())
    }

    fn from_value(v: Option<&str>) -> Self {
        let pretty = match v {
            Some(v) if v.eq_ignore_ascii_case("1") || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") => true,
            _ => false,
        };
        OutputConfig { pretty }
    }
}
