#![allow(dead_code)]

use std::sync::Arc;
use propdesc::{Descriptor, DescriptorCollection, DescriptorRef, PropertyDescriptor, Value};

pub fn desc(name: &str, value: impl Into<Value>) -> DescriptorRef {
    PropertyDescriptor::new(name, value).into_ref()
}

/// Six descriptors whose names collide case-insensitively in pairs
pub struct Fixture {
    pub a: DescriptorRef,
    pub b: DescriptorRef,
    pub c: DescriptorRef,
    pub d: DescriptorRef,
    pub e: DescriptorRef,
    pub f: DescriptorRef,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            a: desc("Foo", 2i64),
            b: desc("Aim", 3i64),
            c: desc("Bim", 1i64),
            d: desc("AIm", 5i64),
            e: desc("Boo", 4i64),
            f: desc("FOo", 6i64),
        }
    }

    pub fn collection(&self) -> DescriptorCollection {
        DescriptorCollection::new(
            Some(vec![
                self.a.clone(),
                self.b.clone(),
                self.c.clone(),
                self.d.clone(),
                self.e.clone(),
                self.f.clone(),
            ]),
            false,
        )
    }

    pub fn original_order(&self) -> [&DescriptorRef; 6] {
        [&self.a, &self.b, &self.c, &self.d, &self.e, &self.f]
    }
}

pub fn assert_order(descriptors: &DescriptorCollection, expected: &[&DescriptorRef]) {
    assert_eq!(descriptors.count(), expected.len(), "count");
    for (i, want) in expected.iter().enumerate() {
        let got = descriptors
            .at(i)
            .unwrap()
            .unwrap_or_else(|| panic!("slot {} is null", i));
        assert!(
            Arc::ptr_eq(got, want),
            "slot {}: expected '{}', got '{}'",
            i,
            want.name(),
            got.name()
        );
    }
}
