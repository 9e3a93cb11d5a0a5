/// EmailJS identifiers, baked in at build time by `build.rs`.
///
/// Set `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and `EMAILJS_PUBLIC_KEY` in the
/// environment of the build. None of them are secret; they ship in the WASM bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(
            env!("EMAILJS_SERVICE_ID"),
            env!("EMAILJS_TEMPLATE_ID"),
            env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn is_complete(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|s| !s.trim().is_empty())
    }
}
