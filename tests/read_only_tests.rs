mod common;

use common::desc;
use propdesc::prelude::*;

fn expect_not_modifiable<T: std::fmt::Debug>(result: Result<T>, case: &str) {
    match result {
        Err(err) => assert!(err.is_not_modifiable(), "{}: expected NotModifiable, got {:?}", case, err),
        Ok(value) => panic!("{}: expected NotModifiable, got Ok({:?})", case, value),
    }
}

/// Every mutation surface fails with `NotModifiable`, except dictionary
/// `add` with a null value, which fails the value check first.
fn assert_read_only(descriptors: &mut DescriptorCollection, case: &str) {
    let mock = desc("Date", "2005-01-01");
    let count = descriptors.count();

    expect_not_modifiable(descriptors.add(mock.clone()), &format!("{case}#1"));
    expect_not_modifiable(descriptors.add(None::<DescriptorRef>), &format!("{case}#2"));
    expect_not_modifiable(descriptors.clear(), &format!("{case}#3"));
    expect_not_modifiable(descriptors.insert(0, mock.clone()), &format!("{case}#4"));
    expect_not_modifiable(descriptors.insert(0, None::<DescriptorRef>), &format!("{case}#5"));
    expect_not_modifiable(descriptors.remove(&mock), &format!("{case}#6"));
    expect_not_modifiable(descriptors.remove(None::<&DescriptorRef>), &format!("{case}#7"));
    expect_not_modifiable(descriptors.remove_at(0), &format!("{case}#8"));

    {
        let mut list = descriptors.as_list_mut();
        assert!(list.is_read_only(), "{case}#9");
        assert!(list.is_fixed_size(), "{case}#10");

        expect_not_modifiable(list.add(mock.clone().into()), &format!("{case}#11"));
        expect_not_modifiable(list.add(Element::Null), &format!("{case}#12"));
        expect_not_modifiable(list.clear(), &format!("{case}#13"));
        expect_not_modifiable(list.insert(0, mock.clone().into()), &format!("{case}#14"));
        expect_not_modifiable(list.insert(0, Element::Null), &format!("{case}#15"));
        expect_not_modifiable(list.remove(&mock.clone().into()), &format!("{case}#16"));
        expect_not_modifiable(list.remove(&Element::Null), &format!("{case}#17"));
        expect_not_modifiable(list.remove_at(0), &format!("{case}#18"));
        expect_not_modifiable(list.set(0, mock.clone().into()), &format!("{case}#19"));
        expect_not_modifiable(list.set(0, Element::Null), &format!("{case}#20"));
        // read-only wins over the type check too
        expect_not_modifiable(list.add(Value::Integer(5).into()), &format!("{case}#20b"));
    }

    {
        let mut dictionary = descriptors.as_dictionary_mut();
        assert!(dictionary.is_read_only(), "{case}#21");
        assert!(dictionary.is_fixed_size(), "{case}#22");

        let key = Value::from("test");
        expect_not_modifiable(dictionary.add(&key, mock.clone().into()), &format!("{case}#23"));

        // value is checked before read-only
        let err = dictionary.add(&key, Element::Null).unwrap_err();
        assert!(err.is_invalid_argument(), "{case}#24: {:?}", err);

        expect_not_modifiable(dictionary.clear(), &format!("{case}#25"));
        expect_not_modifiable(dictionary.set(&Value::from(0i64), mock.clone().into()), &format!("{case}#26"));
        expect_not_modifiable(dictionary.set(&Value::from(0i64), Element::Null), &format!("{case}#27"));
        expect_not_modifiable(dictionary.remove(&key), &format!("{case}#28"));
    }

    assert_eq!(descriptors.count(), count, "{case}: store changed");
}

#[test]
fn test_empty() {
    let mut descriptors = DescriptorCollection::empty();
    assert_eq!(descriptors.count(), 0);
    assert_read_only(&mut descriptors, "Empty");
}

#[test]
fn test_shared_empty_stays_empty() {
    let mut handle = DescriptorCollection::empty();
    assert!(handle.add(desc("X", 1i64)).unwrap_err().is_not_modifiable());
    assert!(handle.as_list_mut().add(desc("X", 1i64).into()).unwrap_err().is_not_modifiable());

    let shared = DescriptorCollection::shared_empty();
    assert_eq!(shared.count(), 0);
    assert!(shared.is_read_only());
    assert_eq!(DescriptorCollection::empty().count(), 0);
}

/// Views borrowed from `&DescriptorCollection` answer reads and reject writes
fn assert_shared_views(descriptors: &DescriptorCollection, case: &str) {
    let mock = desc("Date", "2005-01-01");
    let count = descriptors.count();

    {
        let mut list = descriptors.as_list();
        assert_eq!(list.count(), count, "{case}#L1");
        assert!(list.is_read_only(), "{case}#L2");
        assert!(list.is_fixed_size(), "{case}#L3");
        assert!(!list.is_synchronized(), "{case}#L4");
        assert!(!list.contains(&mock.clone().into()), "{case}#L5");

        expect_not_modifiable(list.add(mock.clone().into()), &format!("{case}#L6"));
        expect_not_modifiable(list.add(Value::Integer(5).into()), &format!("{case}#L7"));
        expect_not_modifiable(list.insert(0, Element::Null), &format!("{case}#L8"));
        expect_not_modifiable(list.set(0, mock.clone().into()), &format!("{case}#L9"));
        expect_not_modifiable(list.remove(&Element::Null), &format!("{case}#L10"));
        expect_not_modifiable(list.remove_at(0), &format!("{case}#L11"));
        expect_not_modifiable(list.clear(), &format!("{case}#L12"));
    }

    {
        let mut dictionary = descriptors.as_dictionary();
        assert_eq!(dictionary.count(), count, "{case}#D1");
        assert!(dictionary.is_read_only(), "{case}#D2");
        assert!(dictionary.is_fixed_size(), "{case}#D3");
        assert!(dictionary.get(&Value::from("Date")).unwrap().is_none(), "{case}#D4");
        assert!(!dictionary.contains(&Value::from("Date")).unwrap(), "{case}#D5");

        let key = Value::from("test");
        expect_not_modifiable(dictionary.add(&key, mock.clone().into()), &format!("{case}#D6"));
        assert!(dictionary.add(&key, Element::Null).unwrap_err().is_invalid_argument(), "{case}#D7");
        expect_not_modifiable(dictionary.set(&key, mock.clone().into()), &format!("{case}#D8"));
        expect_not_modifiable(dictionary.remove(&key), &format!("{case}#D9"));
        expect_not_modifiable(dictionary.clear(), &format!("{case}#D10"));
    }

    assert_eq!(descriptors.count(), count, "{case}: store changed");
}

#[test]
fn test_shared_empty_views() {
    let shared = DescriptorCollection::shared_empty();
    assert_shared_views(shared, "SharedEmpty");

    assert!(shared.as_list().get(0).unwrap_err().is_index_out_of_range());
    assert!(shared.as_dictionary().keys().is_empty());
}

#[test]
fn test_shared_view_of_writable_collection() {
    let a = desc("A", 1i64);
    let descriptors = DescriptorCollection::new(Some(vec![a.clone(), desc("B", 2i64)]), false);
    assert_shared_views(&descriptors, "SharedWritable");

    let list = descriptors.as_list();
    assert_eq!(list.index_of(&a.clone().into()), Some(0));
    let dictionary = descriptors.as_dictionary();
    assert_eq!(dictionary.keys(), vec!["A".to_string(), "B".to_string()]);
    assert!(!descriptors.is_read_only());
}

#[test]
fn test_read_only() {
    let mut descriptors = DescriptorCollection::new(None, true);
    assert_read_only(&mut descriptors, "ReadOnly");
}

#[test]
fn test_read_only_with_items() {
    let a = desc("A", 1i64);
    let mut descriptors = DescriptorCollection::new(Some(vec![a.clone(), desc("B", 2i64)]), true);
    assert_read_only(&mut descriptors, "ReadOnlyItems");

    // reads still work
    assert!(descriptors.find("a", true).unwrap().is_some());
    assert!(descriptors.contains(&a));
    assert_eq!(descriptors.sort().count(), 2);
}

#[test]
fn test_read_only_add_null_reports_not_modifiable() {
    let mut descriptors = DescriptorCollection::with_options(None, CollectionOptions::new().read_only(true));

    let err = descriptors.add(None::<DescriptorRef>).unwrap_err();
    assert!(matches!(err, CollectionError::NotModifiable(_)));

    let err = descriptors.as_list_mut().add(Element::Null).unwrap_err();
    assert!(matches!(err, CollectionError::NotModifiable(_)));
}

#[test]
fn test_read_only_dictionary_add_scalar_reports_invalid_argument() {
    let mut descriptors = DescriptorCollection::new(None, true);
    let err = descriptors
        .as_dictionary_mut()
        .add(&Value::from("whatever"), Value::Integer(5).into())
        .unwrap_err();
    assert!(matches!(err, CollectionError::InvalidArgument(_)));
}
