//! Serde implementation for Set

use core::fmt;
use core::hash::BuildHasher;
use core::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::sets::Set;
use crate::traits::Element;

/// Upper bound on the table pre-allocation taken from an untrusted length hint
const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

impl<T, S> Serialize for Set<T, S>
where
    T: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, S> Deserialize<'de> for Set<T, S>
where
    T: Element + Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor<T, S> {
            _phantom: PhantomData<(T, S)>,
        }

        impl<'de, T, S> Visitor<'de> for SetVisitor<T, S>
        where
            T: Element + Deserialize<'de>,
            S: BuildHasher + Default,
        {
            type Value = Set<T, S>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of set elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Set<T, S>, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let capacity = seq
                    .size_hint()
                    .unwrap_or(0)
                    .min(MAX_PREALLOCATED_ELEMENTS);
                let mut set = Set::with_capacity_and_hasher(capacity, S::default());

                // Duplicates in the input collapse like any other insertion
                while let Some(value) = seq.next_element()? {
                    set.add(value);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor {
            _phantom: PhantomData,
        })
    }
}
