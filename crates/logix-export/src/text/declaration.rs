// crates/logix-export/src/text/declaration.rs

//! Semicolon-terminated declarations inside `TAG`, `PARAMETERS`,
//! `LOCAL_TAGS` and `DATATYPE` bodies.

use super::attributes::{self, AttributeMap, parse_attribute_list};
use super::find_matching;
use alloc::string::String;
use alloc::vec::Vec;
use log::trace;

/// One parsed declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagDeclaration {
    pub name: String,
    /// Empty for alias declarations.
    pub data_type: String,
    /// Interior of a `[..]` suffix, e.g. `"10"` or `"2,3"`.
    pub dimensions: Option<String>,
    pub attributes: AttributeMap,
    /// Initial value after `:=`, verbatim.
    pub value: Option<String>,
    /// Target of a `Name OF Target` alias.
    pub alias_for: Option<String>,
}

impl TagDeclaration {
    /// Case-insensitive attribute lookup, empty values treated as absent.
    pub fn attr(&self, key: &str) -> Option<String> {
        attributes::attr_string(&self.attributes, key)
    }

    /// Boolean attribute lookup (`Yes`/`No`/`true`/`false`/`1`/`0`).
    pub fn flag(&self, key: &str) -> Option<bool> {
        attributes::attr_flag(&self.attributes, key)
    }
}

/// Joins the lines of a block body into complete declarations.
///
/// Lines are concatenated until one ends with `;`. A trailing fragment that
/// never reaches a `;` is dropped.
pub fn collect_declarations(body: &str) -> Vec<String> {
    let mut declarations = Vec::new();
    let mut pending = String::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !pending.is_empty() {
            pending.push(' ');
        }
        pending.push_str(line);

        if line.ends_with(';') {
            declarations.push(core::mem::take(&mut pending));
        }
    }

    if !pending.is_empty() {
        trace!("Dropping unterminated declaration: {}", pending);
    }
    declarations
}

/// Parses `Name : Type[dims] (attributes) := value;`.
///
/// The name/type separator is the first `:` that does not start a `:=`.
/// Without such a separator, `Name OF Target (attributes);` is accepted as
/// an alias. Anything else yields `None`.
pub fn parse_tag_declaration(declaration: &str) -> Option<TagDeclaration> {
    let text = strip_terminator(declaration);

    let Some(colon) = find_type_separator(text) else {
        return parse_alias(text);
    };

    let name = text[..colon].trim();
    if name.contains(char::is_whitespace) {
        // Alias targets may contain `:` themselves (`Local:1:I.Data`).
        return parse_alias(text);
    }
    if name.is_empty() {
        return None;
    }

    let rest = text[colon + 1..].trim_start();
    let type_len = rest
        .find(|c: char| c.is_whitespace() || c == '(' || c == '[' || c == ':')
        .unwrap_or(rest.len());
    let data_type = &rest[..type_len];
    if data_type.is_empty() {
        return None;
    }

    let mut decl = TagDeclaration {
        name: String::from(name),
        data_type: String::from(data_type),
        ..Default::default()
    };
    parse_suffixes(&rest[type_len..], &mut decl);
    Some(decl)
}

/// Parses a `DATATYPE` member line.
///
/// Accepts both the `Name : Type (...)` declaration form and the native
/// member form `TYPE Name[dims] (attributes);`, including bit members such
/// as `BIT Flag Backing : 0 (...)`.
pub fn parse_member_declaration(declaration: &str) -> Option<TagDeclaration> {
    let text = strip_terminator(declaration);
    let head_end = text.find('(').unwrap_or(text.len());
    let head = &text[..head_end];

    if let Some(colon) = find_type_separator(head) {
        if head[..colon].split_whitespace().count() == 1 {
            return parse_tag_declaration(text);
        }
    }

    let mut tokens = head.split_whitespace();
    let data_type = tokens.next()?;
    let name_token = tokens.next()?;

    let (name, dimensions) = match name_token.find('[') {
        Some(open) => {
            let close = find_matching(&name_token[open..], '[', ']')?;
            (
                &name_token[..open],
                Some(String::from(name_token[open + 1..open + close].trim())),
            )
        }
        None => (name_token, None),
    };

    let attributes = match text[head_end..].trim_start() {
        group if group.starts_with('(') => find_matching(group, '(', ')')
            .map(|close| parse_attribute_list(&group[1..close]))
            .unwrap_or_default(),
        _ => AttributeMap::new(),
    };

    Some(TagDeclaration {
        name: String::from(name),
        data_type: String::from(data_type),
        dimensions,
        attributes,
        value: None,
        alias_for: None,
    })
}

fn strip_terminator(declaration: &str) -> &str {
    let text = declaration.trim();
    text.strip_suffix(';').unwrap_or(text).trim_end()
}

/// First `:` that is not the start of a `:=`.
fn find_type_separator(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len()).find(|&i| bytes[i] == b':' && bytes.get(i + 1) != Some(&b'='))
}

/// `Name OF Target (attributes)`.
fn parse_alias(text: &str) -> Option<TagDeclaration> {
    let head_end = [text.find('('), text.find(":=")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(text.len());
    let mut tokens = text[..head_end].split_whitespace();
    let name = tokens.next()?;
    if !tokens.next()?.eq_ignore_ascii_case("OF") {
        return None;
    }
    let target = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    let mut decl = TagDeclaration {
        name: String::from(name),
        alias_for: Some(String::from(target)),
        ..Default::default()
    };
    parse_suffixes(&text[head_end..], &mut decl);
    Some(decl)
}

/// Consumes the optional `[dims]`, `(attributes)` and `:= value` parts that
/// follow the data type.
fn parse_suffixes(mut rest: &str, decl: &mut TagDeclaration) {
    rest = rest.trim_start();

    if rest.starts_with('[') {
        if let Some(close) = find_matching(rest, '[', ']') {
            decl.dimensions = Some(String::from(rest[1..close].trim()));
            rest = rest[close + 1..].trim_start();
        }
    }

    if rest.starts_with('(') {
        if let Some(close) = find_matching(rest, '(', ')') {
            decl.attributes = parse_attribute_list(&rest[1..close]);
            rest = rest[close + 1..].trim_start();
        }
    }

    if let Some(value) = rest.strip_prefix(":=") {
        let value = value.trim();
        if !value.is_empty() {
            decl.value = Some(String::from(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_full_declaration() {
        let decl = parse_tag_declaration("MyTag : DINT (Radix := Decimal) := 0;").unwrap();
        assert_eq!(decl.name, "MyTag");
        assert_eq!(decl.data_type, "DINT");
        assert_eq!(decl.attr("Radix").as_deref(), Some("Decimal"));
        assert_eq!(decl.value.as_deref(), Some("0"));
        assert_eq!(decl.dimensions, None);
    }

    #[test]
    fn test_array_declaration() {
        let decl = parse_tag_declaration("MyArray : DINT[10];").unwrap();
        assert_eq!(decl.name, "MyArray");
        assert_eq!(decl.data_type, "DINT");
        assert_eq!(decl.dimensions.as_deref(), Some("10"));
        assert!(decl.attributes.is_empty());
        assert_eq!(decl.value, None);
    }

    #[test]
    fn test_value_without_attributes_and_array_value() {
        let decl = parse_tag_declaration("Grid : INT[2,3] := [0,0,0,0,0,0];").unwrap();
        assert_eq!(decl.dimensions.as_deref(), Some("2,3"));
        assert_eq!(decl.value.as_deref(), Some("[0,0,0,0,0,0]"));

        let decl = parse_tag_declaration("Count:DINT:=5;").unwrap();
        assert_eq!(decl.name, "Count");
        assert_eq!(decl.data_type, "DINT");
        assert_eq!(decl.value.as_deref(), Some("5"));
    }

    #[test]
    fn test_separator_skips_assignment_tokens() {
        // The `:=` inside the attributes must never be taken as the name/type separator.
        let decl =
            parse_tag_declaration("Speed : REAL (Description := \"m/s: measured\", RADIX := Float) := 1.5;")
                .unwrap();
        assert_eq!(decl.name, "Speed");
        assert_eq!(decl.data_type, "REAL");
        assert_eq!(decl.attr("Description").as_deref(), Some("m/s: measured"));
        assert_eq!(decl.attr("radix").as_deref(), Some("Float"));
        assert_eq!(decl.value.as_deref(), Some("1.5"));
    }

    #[test]
    fn test_alias_declaration() {
        let decl = parse_tag_declaration("StartPB OF Local:1:I.Data.0 (RADIX := Decimal);").unwrap();
        assert_eq!(decl.name, "StartPB");
        assert_eq!(decl.data_type, "");
        assert_eq!(decl.alias_for.as_deref(), Some("Local:1:I.Data.0"));
        assert_eq!(decl.attr("Radix").as_deref(), Some("Decimal"));
    }

    #[test]
    fn test_plain_alias_declaration() {
        let decl = parse_tag_declaration("Motor_Run OF MotorOutput;").unwrap();
        assert_eq!(decl.alias_for.as_deref(), Some("MotorOutput"));
        assert!(decl.attributes.is_empty());
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_tag_declaration(";"), None);
        assert_eq!(parse_tag_declaration("just words here;"), None);
        assert_eq!(parse_tag_declaration(" : DINT;"), None);
    }

    #[test]
    fn test_collect_multiline_declarations() {
        let body = "\n  A : BOOL (Description := \"first\",\n      RADIX := Decimal) := 0;\n\n  B : DINT;\n  C : DINT (RADIX";
        let decls = collect_declarations(body);
        assert_eq!(
            decls,
            vec![
                String::from("A : BOOL (Description := \"first\", RADIX := Decimal) := 0;"),
                String::from("B : DINT;"),
            ]
        );
    }

    #[test]
    fn test_native_member_forms() {
        let member = parse_member_declaration("DINT Count (Description := \"Parts\", Radix := Decimal);").unwrap();
        assert_eq!(member.name, "Count");
        assert_eq!(member.data_type, "DINT");
        assert_eq!(member.attr("Description").as_deref(), Some("Parts"));

        let member = parse_member_declaration("REAL Samples[16] (Radix := Float);").unwrap();
        assert_eq!(member.name, "Samples");
        assert_eq!(member.data_type, "REAL");
        assert_eq!(member.dimensions.as_deref(), Some("16"));

        let member = parse_member_declaration("BIT Ready ZZZZZZZZZZPump0 : 0 (Radix := Decimal);").unwrap();
        assert_eq!(member.name, "Ready");
        assert_eq!(member.data_type, "BIT");
    }

    #[test]
    fn test_member_declaration_form() {
        let member = parse_member_declaration("Speed : REAL (Radix := Float);").unwrap();
        assert_eq!(member.name, "Speed");
        assert_eq!(member.data_type, "REAL");
        assert_eq!(member.attr("Radix").as_deref(), Some("Float"));
    }
}
