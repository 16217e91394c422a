// crates/logix-export/tests/robustness.rs

//! Integration tests focused on error handling and edge cases.
//!
//! Only a missing root is fatal. Everything else (unterminated blocks,
//! malformed declarations, absent attributes) must degrade to omission
//! without panicking.

use logix_export::{
    ExportError, UsageType, extract_blocks, load_l5k_from_str, load_l5x_from_str,
    parse_attribute_list, parse_tag_declaration,
};

/// A minimal valid L5X document used as a base for corrupted variants.
const MINIMAL_VALID_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<RSLogix5000Content SchemaRevision="1.0" SoftwareRevision="33.01" TargetName="Cell" TargetType="Controller">
<Controller Use="Target" Name="Cell" ProcessorType="5069-L320ER">
<Programs>
<Program Name="P" MainRoutineName="R">
<Routines>
<Routine Name="R" Type="RLL">
<RLLContent>
<Rung Number="0" Type="N">
<Text><![CDATA[XIC(In)OTE(Out);]]></Text>
</Rung>
</RLLContent>
</Routine>
</Routines>
</Program>
</Programs>
</Controller>
</RSLogix5000Content>"#;

/// Verifies that malformed XML syntax is reported, not panicked on.
#[test]
fn test_malformed_xml_syntax() {
    let xml = MINIMAL_VALID_XML.replace("</Routines>", "</Routine>");
    let result = load_l5x_from_str(&xml);
    assert!(
        matches!(result, Err(ExportError::XmlParsing(_))),
        "Expected XmlParsing error, got {:?}",
        result
    );
}

/// Verifies that a document with a different root element is rejected.
#[test]
fn test_wrong_root_element() {
    let xml = MINIMAL_VALID_XML.replace("RSLogix5000Content", "Project");
    let result = load_l5x_from_str(&xml);
    assert!(
        matches!(
            result,
            Err(ExportError::MissingElement {
                element: "RSLogix5000Content"
            })
        ),
        "Expected MissingElement for the root, got {:?}",
        result
    );
}

/// Verifies that the resolver requires the `Controller` element.
#[test]
fn test_missing_controller_element() {
    let start = MINIMAL_VALID_XML.find("<Controller ").unwrap();
    let end = MINIMAL_VALID_XML.find("</Controller>").unwrap() + "</Controller>".len();
    let mut xml = MINIMAL_VALID_XML.to_string();
    xml.replace_range(start..end, "");

    let result = load_l5x_from_str(&xml);
    assert!(
        matches!(
            result,
            Err(ExportError::MissingElement {
                element: "Controller"
            })
        ),
        "Expected MissingElement for Controller, got {:?}",
        result
    );
}

/// Rung numbers come from the `Number` attribute, even when out of order.
#[test]
fn test_l5x_out_of_order_rung_numbers() {
    let xml = MINIMAL_VALID_XML.replace(
        r#"<Rung Number="0" Type="N">
<Text><![CDATA[XIC(In)OTE(Out);]]></Text>
</Rung>"#,
        r#"<Rung Number="7" Type="N"><Text><![CDATA[XIC(In)OTE(Out);]]></Text></Rung>
<Rung Number="3" Type="N"><Text><![CDATA[XIO(In)OTE(Alt);]]></Text></Rung>"#,
    );
    let result = load_l5x_from_str(&xml).expect("Failed to parse reordered rungs");

    let numbers: Vec<u32> = result.rungs.iter().map(|r| r.number).collect();
    assert_eq!(numbers, [7, 3]);
    assert_eq!(result.routines[0].rung_count, Some(2));
    assert!(result.tag_references().all(|r| r.rung_number == 7 || r.rung_number == 3));
}

/// Verifies that XML entities are decoded in attributes and text.
#[test]
fn test_xml_entity_decoding() {
    let xml = MINIMAL_VALID_XML.replace(
        r#"<Routine Name="R" Type="RLL">"#,
        r#"<Routine Name="R" Type="RLL"><Description>Fill &amp; drain</Description>"#,
    );
    let result = load_l5x_from_str(&xml).expect("Failed to parse XML with entities");
    assert_eq!(result.routines[0].description.as_deref(), Some("Fill & drain"));
}

/// Verifies that a plaintext export without a controller block is fatal.
#[test]
fn test_l5k_missing_controller() {
    let text = "IE_VER := 2.26;\nPROGRAM P ()\nEND_PROGRAM\n";
    let result = load_l5k_from_str(text);
    assert!(
        matches!(
            result,
            Err(ExportError::MissingRootBlock {
                keyword: "CONTROLLER"
            })
        ),
        "Expected MissingRootBlock, got {:?}",
        result
    );
    assert_eq!(result.unwrap_err().kind(), "MissingRootBlock");
}

/// An unterminated inner block is skipped; the rest of the project survives.
#[test]
fn test_l5k_unterminated_inner_block() {
    let text = "\
CONTROLLER C ()
    DATATYPE Broken ()
        DINT Value;
    TAG
        Good : DINT;
    END_TAG
    PROGRAM P ()
        ROUTINE R
            N: XIC(Good)OTE(Out);
        END_ROUTINE
    END_PROGRAM
END_CONTROLLER
";
    let result = load_l5k_from_str(text).expect("Unterminated sub-block must not be fatal");
    assert!(result.udts.is_empty());
    assert_eq!(result.tags.len(), 1);
    assert_eq!(result.rungs.len(), 1);
    assert_eq!(result.rungs[0].tag_references[1].usage_type, UsageType::Write);
}

/// Malformed declarations are dropped, their neighbours kept.
#[test]
fn test_l5k_malformed_declarations() {
    let text = "\
CONTROLLER C ()
    TAG
        : DINT;
        NoType ;
        Good : DINT := 5;
        Unfinished : DINT
    END_TAG
END_CONTROLLER
";
    let result = load_l5k_from_str(text).expect("Malformed declarations must not be fatal");
    let names: Vec<&str> = result.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Good"]);
    assert_eq!(result.tags[0].value.as_deref(), Some("5"));
}

/// Same-keyword nesting three deep still yields one outer span.
#[test]
fn test_deeply_nested_blocks() {
    let text = "ROUTINE a ROUTINE b ROUTINE c ROUTINE d END_ROUTINE END_ROUTINE END_ROUTINE END_ROUTINE";
    let blocks = extract_blocks(text, "ROUTINE");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text, text);
}

#[test]
fn test_attribute_and_declaration_edge_cases() {
    let attrs = parse_attribute_list(r#"A := "a", B := 5, C := "say ""hi""""#);
    assert_eq!(attrs.get("A").map(String::as_str), Some("a"));
    assert_eq!(attrs.get("B").map(String::as_str), Some("5"));
    assert_eq!(attrs.get("C").map(String::as_str), Some(r#"say "hi""#));
    assert!(parse_attribute_list("").is_empty());

    let decl = parse_tag_declaration("MyTag : DINT (Radix := Decimal) := 0;").unwrap();
    assert_eq!(decl.name, "MyTag");
    assert_eq!(decl.data_type, "DINT");
    assert_eq!(decl.attr("Radix").as_deref(), Some("Decimal"));
    assert_eq!(decl.value.as_deref(), Some("0"));

    let decl = parse_tag_declaration("MyArray : DINT[10];").unwrap();
    assert_eq!(decl.data_type, "DINT");
    assert_eq!(decl.dimensions.as_deref(), Some("10"));
}

/// Empty sections produce empty lists rather than errors.
#[test]
fn test_empty_controller() {
    let result = load_l5k_from_str("CONTROLLER Empty ()\nEND_CONTROLLER\n").unwrap();
    assert!(result.tags.is_empty());
    assert!(result.programs.is_empty());
    assert!(result.udts.is_empty());
    assert_eq!(result.metadata.project_name.as_deref(), Some("Empty"));

    let xml = r#"<RSLogix5000Content><Controller Name="Empty"/></RSLogix5000Content>"#;
    let result = load_l5x_from_str(xml).unwrap();
    assert!(result.rungs.is_empty());
    assert_eq!(result.metadata.project_name.as_deref(), Some("Empty"));
}
