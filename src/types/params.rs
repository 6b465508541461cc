use serde::Deserialize;

use super::seed::*;

#[derive(Debug, Clone, Deserialize)]
pub struct SampleParams {
    pub seed: Seed,
    pub min: Bound,
    pub max: Bound,
    pub count: u32,
    #[serde(default)]
    pub unbiased: bool, // rejection sampling instead of the plain modulo mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbiased_defaults_to_false() {
        let params: SampleParams =
            serde_json::from_str(r#"{"seed":999,"min":1,"max":100,"count":10}"#).unwrap();

        assert_eq!(params.seed, 999);
        assert_eq!((params.min, params.max), (1, 100));
        assert_eq!(params.count, 10);
        assert!(!params.unbiased);
    }
}
