//! # Declaration Macro
//!
//! [`closed_enumeration!`](crate::closed_enumeration) declares a kind and its
//! closed set of values in one place. It generates:
//!
//! - the kind struct, holding the private `name` plus any extra fields
//! - one associated constant per value
//! - the declared slice returned by `ClosedEnumeration::declared`, in
//!   declaration order
//! - `PartialEq`/`Eq`/`Hash`/`PartialOrd`/`Ord` over the name only
//! - `Debug`, `Display` (the name) and `FromStr` (case-insensitive lookup)
//! - `Serialize`/`Deserialize` as the name string
//!
//! ```
//! use closed_enum_core::{ClosedEnumeration, closed_enumeration};
//!
//! closed_enumeration! {
//!     /// Traffic light colours.
//!     pub struct Light {
//!         pub stop: bool,
//!     }
//!     values {
//!         RED = "Red" { stop: true },
//!         AMBER = "Amber" { stop: true },
//!         GREEN = "Green" { stop: false },
//!     }
//! }
//!
//! assert_eq!(Light::describe(), "Red, Amber, Green");
//! assert_eq!(Light::from_name("green"), Ok(Light::GREEN));
//! assert!(!Light::GREEN.stop);
//! ```
//!
//! Kinds without extra fields use the unit form:
//!
//! ```
//! use closed_enum_core::{ClosedEnumeration, closed_enumeration};
//!
//! closed_enumeration! {
//!     pub struct Status;
//!     values {
//!         ACTIVE = "Active",
//!         INACTIVE = "Inactive",
//!     }
//! }
//!
//! assert_eq!(Status::ACTIVE.to_string(), "Active");
//! assert_eq!("INACTIVE".parse::<Status>(), Ok(Status::INACTIVE));
//! ```

/// Declare a closed enumeration kind. See the [module docs](crate::declare).
#[macro_export]
macro_rules! closed_enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis struct $kind:ident;
        values {
            $( $(#[$vmeta:meta])* $value:ident = $name:literal ),* $(,)?
        }
    ) => {
        $crate::closed_enumeration! {
            $(#[$meta])*
            $vis struct $kind {}
            values {
                $( $(#[$vmeta])* $value = $name {} ),*
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $kind:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
        values {
            $(
                $(#[$vmeta:meta])*
                $value:ident = $name:literal { $( $vfield:ident : $vexpr:expr ),* $(,)? }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        #[allow(dead_code)]
        $vis struct $kind {
            name: &'static str,
            $( $(#[$fmeta])* $fvis $field: $fty, )*
        }

        impl $kind {
            $(
                $(#[$vmeta])*
                #[allow(dead_code)]
                $vis const $value: $kind = $kind {
                    name: $name,
                    $( $vfield: $vexpr, )*
                };
            )*
        }

        impl $crate::ClosedEnumeration for $kind {
            const KIND: &'static str = ::core::stringify!($kind);

            fn declared() -> &'static [Self] {
                const DECLARED: &[$kind] = &[ $( $kind::$value ),* ];
                DECLARED
            }

            fn name(&self) -> &'static str {
                self.name
            }
        }

        impl ::core::cmp::PartialEq for $kind {
            fn eq(&self, other: &Self) -> bool {
                self.name == other.name
            }
        }

        impl ::core::cmp::Eq for $kind {}

        impl ::core::hash::Hash for $kind {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(self.name, state);
            }
        }

        impl ::core::cmp::PartialOrd for $kind {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $kind {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(self.name, other.name)
            }
        }

        impl ::core::fmt::Debug for $kind {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, "{}::{}", ::core::stringify!($kind), self.name)
            }
        }

        impl ::core::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name)
            }
        }

        impl ::core::str::FromStr for $kind {
            type Err = $crate::EnumerationError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::enumeration::from_name::<Self>(s)
            }
        }

        impl $crate::__private::serde::Serialize for $kind {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::formats::by_name::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $kind {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::formats::by_name::deserialize(deserializer)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{ClosedEnumeration, closed_enumeration};
    use std::collections::{BTreeSet, HashSet};

    closed_enumeration! {
        /// Planets with their order from the sun.
        #[derive(Copy)]
        pub(crate) struct Planet {
            pub(crate) order: u8,
            pub(crate) rocky: bool,
        }
        values {
            MERCURY = "Mercury" { order: 1, rocky: true },
            VENUS = "Venus" { order: 2, rocky: true },
            /// Home.
            EARTH = "Earth" { order: 3, rocky: true },
            JUPITER = "Jupiter" { order: 5, rocky: false },
        }
    }

    #[test]
    fn extra_fields_are_carried() {
        assert_eq!(Planet::EARTH.order, 3);
        assert!(!Planet::JUPITER.rocky);
        let rocky: Vec<_> = Planet::all().filter(|p| p.rocky).map(|p| p.order).collect();
        assert_eq!(rocky, vec![1, 2, 3]);
    }

    #[test]
    fn kind_label_is_type_name() {
        assert_eq!(Planet::KIND, "Planet");
    }

    #[test]
    fn display_and_debug_render_name() {
        assert_eq!(Planet::VENUS.to_string(), "Venus");
        assert_eq!(format!("{:?}", Planet::VENUS), "Planet::Venus");
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("mercury".parse::<Planet>(), Ok(Planet::MERCURY));
        assert!("Pluto".parse::<Planet>().is_err());
    }

    #[test]
    fn hash_and_btree_sets_deduplicate_by_name() {
        let hashed: HashSet<Planet> = [Planet::EARTH, Planet::EARTH, Planet::VENUS]
            .into_iter()
            .collect();
        assert_eq!(hashed.len(), 2);

        let ordered: Vec<_> = Planet::all()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(ordered, vec!["Earth", "Jupiter", "Mercury", "Venus"]);
    }

    #[test]
    fn serde_uses_the_name() {
        let json = serde_json::to_string(&Planet::EARTH).unwrap_or_default();
        assert_eq!(json, "\"Earth\"");

        let back: Planet = serde_json::from_str("\"EARTH\"").unwrap_or(Planet::VENUS);
        assert_eq!(back, Planet::EARTH);
    }

    #[test]
    fn serde_rejects_unknown_names_with_the_list() {
        let err = serde_json::from_str::<Planet>("\"Pluto\"").err();
        let msg = err.map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.contains("unknown Planet value \"Pluto\""));
        assert!(msg.contains("Mercury, Venus, Earth, Jupiter"));
    }
}
