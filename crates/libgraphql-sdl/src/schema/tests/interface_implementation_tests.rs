use crate::schema::tests::test_utils::validate_messages;

#[test]
fn missing_transitive_interface() {
    assert_eq!(validate_messages(concat!(
        "interface A { f: Int }\n",
        "interface B implements A { f: Int }\n",
        "type T implements B { f: Int }\n",
    )), vec![
        "Object 'T' is missing implements 'A' declared on interface 'B'.",
    ]);
}

#[test]
fn missing_interface_reported_once() {
    assert_eq!(validate_messages(concat!(
        "interface C { f: Int }\n",
        "interface A implements C { f: Int }\n",
        "interface B implements C { f: Int }\n",
        "type T implements A & B { f: Int }\n",
    )), vec![
        "Object 'T' is missing implements 'C' declared on interface 'A'.",
    ]);
}

#[test]
fn transitively_closed_implements() {
    assert!(validate_messages(concat!(
        "interface A { f: Int }\n",
        "interface B implements A { f: Int }\n",
        "type T implements B & A { f: Int }\n",
    )).is_empty());
}

#[test]
fn missing_interface_field() {
    assert_eq!(validate_messages("interface A { f: Int } type T implements A { g: Int }"), vec![
        "Object 'T' is missing field 'f' declared on interface 'A'.",
    ]);
}

#[test]
fn implementing_a_non_interface() {
    assert_eq!(validate_messages("type O { f: Int } type T implements O { f: Int }"), vec![
        "Object 'T' cannot implement 'O' because it is an object, not an interface.",
    ]);
}

#[test]
fn implementing_an_undefined_interface() {
    assert_eq!(validate_messages("type T implements Nope { f: Int }"), vec![
        "Undefined interface 'Nope' implemented by object 'T'.",
    ]);
}

#[test]
fn interface_implementing_itself() {
    assert_eq!(validate_messages("interface A implements A { f: Int }"), vec![
        "Interface 'A' cannot implement itself.",
    ]);
}

#[test]
fn interfaces_implementing_each_other() {
    assert_eq!(validate_messages(concat!(
        "interface A implements B { f: Int }\n",
        "interface B implements A { f: Int }\n",
    )), vec![
        "Interface 'A' cannot implement itself.",
        "Interface 'B' cannot implement itself.",
    ]);
}

mod arguments {
    use super::*;

    #[test]
    fn argument_type_mismatch() {
        assert_eq!(validate_messages(concat!(
            "interface A { f(x: Int): Int }\n",
            "type T implements A { f(x: String): Int }\n",
        )), vec![
            "Argument 'x' of field 'f' of object 'T' has type 'String', but interface 'A' \
            declares it with type 'Int'.",
        ]);
    }

    #[test]
    fn missing_argument() {
        assert_eq!(validate_messages(concat!(
            "interface A { f(x: Int): Int }\n",
            "type T implements A { f: Int }\n",
        )), vec![
            "Field 'f' of object 'T' is missing argument 'x' declared on interface 'A'.",
        ]);
    }

    #[test]
    fn extra_required_argument() {
        assert_eq!(validate_messages(concat!(
            "interface A { f: Int }\n",
            "type T implements A { f(y: Int!): Int }\n",
        )), vec![
            "Argument 'y' of field 'f' of object 'T' is not declared on interface 'A' and \
            must be nullable.",
        ]);
    }

    #[test]
    fn extra_nullable_argument() {
        assert!(validate_messages(concat!(
            "interface A { f: Int }\n",
            "type T implements A { f(y: Int): Int }\n",
        )).is_empty());
    }
}

mod return_types {
    use super::*;

    #[test]
    fn covariant_return_types() {
        assert!(validate_messages(concat!(
            "interface Node { id: ID }\n",
            "type User implements Node { id: ID friend: User }\n",
            "union Result = User\n",
            "interface HasNode { node: Node list: [Node] result: Result }\n",
            "type Impl implements HasNode { node: User! list: [User!]! result: User }\n",
        )).is_empty());
    }

    #[test]
    fn nullable_cannot_implement_non_null() {
        assert_eq!(validate_messages("interface A { f: Int! } type T implements A { f: Int }"), vec![
            "Field 'f' of object 'T' has type 'Int', which is not a valid implementation of \
            type 'Int!' declared on interface 'A'.",
        ]);
    }

    #[test]
    fn scalar_cannot_implement_list() {
        assert_eq!(validate_messages("interface A { f: [Int] } type T implements A { f: Int }"), vec![
            "Field 'f' of object 'T' has type 'Int', which is not a valid implementation of \
            type '[Int]' declared on interface 'A'.",
        ]);
    }

    #[test]
    fn object_not_implementing_returned_interface() {
        assert_eq!(validate_messages(concat!(
            "interface Node { id: ID }\n",
            "type Other { id: ID }\n",
            "interface HasNode { node: Node }\n",
            "type Impl implements HasNode { node: Other }\n",
        )), vec![
            "Field 'node' of object 'Impl' has type 'Other', which is not a valid \
            implementation of type 'Node' declared on interface 'HasNode'.",
        ]);
    }
}
