#[macro_export]
macro_rules! uuid_key {
    ($TypeName: ident) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $TypeName(uuid::Uuid);

        impl $TypeName {
            pub fn new() -> Self {
                $TypeName(uuid::Uuid::new_v4())
            }

            pub fn inner(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl Default for $TypeName {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<uuid::Uuid> for $TypeName {
            fn from(id: uuid::Uuid) -> Self {
                $TypeName(id)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    uuid_key!(ThingId);

    #[test]
    fn test_new_ids_are_random() {
        assert_ne!(ThingId::new(), ThingId::new());
    }

    #[test]
    fn test_id_serializes_as_a_bare_uuid() {
        let raw = uuid::Uuid::new_v4();
        let id = ThingId::from(raw);

        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            format!("\"{raw}\"")
        );
        assert_eq!(id.to_string(), raw.to_string());
        assert_eq!(id.inner(), raw);
    }
}
