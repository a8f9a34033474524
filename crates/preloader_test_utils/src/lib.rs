pub mod test_config;
pub mod tester;

pub use test_config::TestConfig;

/// Makes `Default` agree with what serde produces for `{}`.
#[macro_export]
macro_rules! impl_serde_default {
  ($name:ident) => {
    impl Default for $name {
      fn default() -> Self {
        serde_json::from_str("{}").expect("`{}` should deserialize with every field defaulted")
      }
    }
  };
}
