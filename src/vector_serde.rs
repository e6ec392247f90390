// Copyright 2024 linvec developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::imp_prelude::*;

/// Version of the serialized representation.
const VECTOR_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized vector matches the current
/// `VECTOR_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != VECTOR_FORMAT_VERSION {
        let err_msg = format!("unknown vector version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

/// **Requires crate feature `"serde"`**
///
/// Views serialize like owned vectors; the mode is not recorded.
impl<A, S, M> Serialize for VecBase<S, M>
where
    A: Serialize,
    S: Data<Elem = A>,
    M: Mode,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut state = serializer.serialize_struct("Vector", 2)?;
        state.serialize_field("v", &VECTOR_FORMAT_VERSION)?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

struct VectorVisitor<A> {
    _marker: PhantomData<A>,
}

enum VectorField {
    Version,
    Data,
}

impl<A> VectorVisitor<A> {
    fn new() -> Self {
        VectorVisitor { _marker: PhantomData }
    }
}

static VECTOR_FIELDS: &[&str] = &["v", "data"];

/// **Requires crate feature `"serde"`**
impl<'de, A> Deserialize<'de> for Vector<A>
where
    A: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Vector<A>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Vector", VECTOR_FIELDS, VectorVisitor::new())
    }
}

impl<'de> Deserialize<'de> for VectorField {
    fn deserialize<D>(deserializer: D) -> Result<VectorField, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VectorFieldVisitor;

        impl<'de> Visitor<'de> for VectorFieldVisitor {
            type Value = VectorField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(r#""v" or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<VectorField, E>
            where
                E: de::Error,
            {
                match value {
                    "v" => Ok(VectorField::Version),
                    "data" => Ok(VectorField::Data),
                    other => Err(de::Error::unknown_field(other, VECTOR_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<VectorField, E>
            where
                E: de::Error,
            {
                match value {
                    b"v" => Ok(VectorField::Version),
                    b"data" => Ok(VectorField::Data),
                    other => Err(de::Error::unknown_field(
                        &String::from_utf8_lossy(other),
                        VECTOR_FIELDS,
                    )),
                }
            }
        }

        deserializer.deserialize_identifier(VectorFieldVisitor)
    }
}

impl<'de, A> Visitor<'de> for VectorVisitor<A>
where
    A: Deserialize<'de>,
{
    type Value = Vector<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("linvec representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Vector<A>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(0, &self));
            }
        };

        verify_version(v)?;

        let data: Vec<A> = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(1, &self));
            }
        };

        Ok(Vector::from_vec(data))
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Vector<A>, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut v: Option<u8> = None;
        let mut data: Option<Vec<A>> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                VectorField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                VectorField::Data => {
                    data = Some(visitor.next_value()?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }

        match data {
            Some(data) => Ok(Vector::from_vec(data)),
            None => Err(de::Error::missing_field("data")),
        }
    }
}
