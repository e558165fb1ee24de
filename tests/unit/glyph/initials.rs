use super::*;

#[test]
fn special_identifiers() {
    assert_eq!(initials("default"), "D");
    assert_eq!(initials("guest"), "G");
    // Special-casing matches the identifier exactly.
    assert_eq!(initials("Default"), "DE");
    assert_eq!(initials("guests"), "GU");
}

#[test]
fn camel_case_takes_first_letters_of_two_words() {
    assert_eq!(initials("turtlePower"), "TP");
    assert_eq!(initials("komodoKingOfLizards"), "KK");
    assert_eq!(initials("ViperVicky"), "VV");
}

#[test]
fn single_word_takes_first_two_characters() {
    assert_eq!(initials("chameleoncham"), "CH");
    assert_eq!(initials("ab"), "AB");
    assert_eq!(initials("x"), "X");
    assert_eq!(initials(""), "");
}

#[test]
fn leading_uppercase_does_not_start_an_extra_word() {
    assert_eq!(initials("Snake"), "SN");
    assert_eq!(initials("aB"), "AB");
}

#[test]
fn non_ascii_is_character_based() {
    assert_eq!(initials("ñandúRojo"), "ÑR");
    assert_eq!(initials("élan"), "ÉL");
}

#[test]
fn camel_words_split_at_uppercase() {
    assert_eq!(camel_words("frogPrinceCharming"), vec!["frog", "Prince", "Charming"]);
    assert_eq!(camel_words("ABC"), vec!["A", "B", "C"]);
    assert!(camel_words("").is_empty());
}
