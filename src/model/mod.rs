/// RFC 3339 timestamp used for `createdAt` / `updatedAt`
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Generates `as_str`, `ALL`, `Display` and `FromStr` for a kebab-case status enum.
macro_rules! string_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!(
                        "'{}' is not one of: {}",
                        other,
                        [$($text),+].join(", ")
                    )),
                }
            }
        }
    };
}

pub mod project;
pub mod service_offering;
pub mod contact;
pub mod product;
pub mod booking;
pub mod category;
pub mod settings;
pub mod user;
