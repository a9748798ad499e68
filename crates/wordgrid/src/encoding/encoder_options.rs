//! # Encoder Options

use serde::{Deserialize, Serialize};

use crate::{
    encoding::StringEncoder,
    policies::{EncodingPolicy, PolicyKind, TfVariant},
    types::TokenType,
};

/// Options for building a [`StringEncoder`].
///
/// Serializable, so a configuration can live in a JSON file;
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringEncoderOptions {
    /// The encoding policy.
    pub policy: PolicyKind,

    /// The term-frequency scheme; only used by [`PolicyKind::TfIdf`].
    pub tf_variant: TfVariant,

    /// Whether to smooth the idf; only used by [`PolicyKind::TfIdf`].
    pub smooth_idf: bool,

    /// Whether to tokenize batches across threads.
    pub parallel: bool,
}

impl Default for StringEncoderOptions {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            tf_variant: TfVariant::default(),
            smooth_idf: true,
            parallel: false,
        }
    }
}

impl StringEncoderOptions {
    /// Get the encoding policy.
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Set the encoding policy.
    pub fn set_policy(
        &mut self,
        policy: PolicyKind,
    ) {
        self.policy = policy;
    }

    /// Set the encoding policy, and return self.
    pub fn with_policy(
        mut self,
        policy: PolicyKind,
    ) -> Self {
        self.set_policy(policy);
        self
    }

    /// Get the term-frequency scheme.
    pub fn tf_variant(&self) -> TfVariant {
        self.tf_variant
    }

    /// Set the term-frequency scheme.
    pub fn set_tf_variant(
        &mut self,
        tf_variant: TfVariant,
    ) {
        self.tf_variant = tf_variant;
    }

    /// Set the term-frequency scheme, and return self.
    pub fn with_tf_variant(
        mut self,
        tf_variant: TfVariant,
    ) -> Self {
        self.set_tf_variant(tf_variant);
        self
    }

    /// Is idf smoothing enabled?
    pub fn smooth_idf(&self) -> bool {
        self.smooth_idf
    }

    /// Set whether idf smoothing is enabled.
    pub fn set_smooth_idf(
        &mut self,
        smooth_idf: bool,
    ) {
        self.smooth_idf = smooth_idf;
    }

    /// Set whether idf smoothing is enabled, and return self.
    pub fn with_smooth_idf(
        mut self,
        smooth_idf: bool,
    ) -> Self {
        self.set_smooth_idf(smooth_idf);
        self
    }

    /// Should tokenization be spread across threads?
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Set whether tokenization is spread across threads.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Set whether tokenization is spread across threads, and return self.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a fresh policy from these options.
    pub fn to_policy(&self) -> EncodingPolicy {
        match self.policy {
            PolicyKind::Ordinal => EncodingPolicy::ordinal(),
            PolicyKind::Presence => EncodingPolicy::presence(),
            PolicyKind::TfIdf => EncodingPolicy::tf_idf(self.tf_variant, self.smooth_idf),
        }
    }

    /// Build an empty [`StringEncoder`].
    pub fn build<T: TokenType>(&self) -> StringEncoder<T> {
        log::info!("building {} encoder", self.policy);
        StringEncoder::new(self.to_policy()).with_parallel(self.parallel)
    }
}

impl From<&EncodingPolicy> for StringEncoderOptions {
    fn from(policy: &EncodingPolicy) -> Self {
        let options = Self::default().with_policy(policy.kind());
        match policy.as_tf_idf() {
            Some(tf_idf) => options
                .with_tf_variant(tf_idf.tf_variant())
                .with_smooth_idf(tf_idf.smooth_idf()),
            None => options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = StringEncoderOptions::default();
        assert_eq!(options.policy(), PolicyKind::Ordinal);
        assert_eq!(options.tf_variant(), TfVariant::RawCount);
        assert!(options.smooth_idf());
        assert!(!options.parallel());
    }

    #[test]
    fn test_build() {
        type T = u32;
        let options = StringEncoderOptions::default()
            .with_policy(PolicyKind::TfIdf)
            .with_tf_variant(TfVariant::SublinearTf)
            .with_smooth_idf(false)
            .with_parallel(true);

        let encoder = options.build::<T>();
        assert!(encoder.parallel());
        assert!(encoder.dictionary().is_empty());

        let tf_idf = encoder.policy().as_tf_idf().unwrap();
        assert_eq!(tf_idf.tf_variant(), TfVariant::SublinearTf);
        assert!(!tf_idf.smooth_idf());

        let recovered = StringEncoderOptions::from(encoder.policy()).with_parallel(true);
        assert_eq!(recovered, options);
    }

    #[test]
    fn test_serde_partial() {
        let options: StringEncoderOptions =
            serde_json::from_str(r#"{"policy": "tf-idf", "tf_variant": "binary"}"#).unwrap();
        assert_eq!(
            options,
            StringEncoderOptions::default()
                .with_policy(PolicyKind::TfIdf)
                .with_tf_variant(TfVariant::Binary)
        );

        let json = serde_json::to_string(&options).unwrap();
        let back: StringEncoderOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
