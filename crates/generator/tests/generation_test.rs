//! Integration tests for tag listing generation

use listtags_gen_common::{sorted_service_names, title_case, GeneratorError, SERVICE_NAMES};
use listtags_gen_generator::{generate_list_tags, ListTagsGenerator, DEFAULT_OUTPUT, FILE_HEADER};
use std::fs;
use tempfile::TempDir;

/// Text of the function generated for `service`, up to the next function
fn function_body<'a>(output: &'a str, service: &str) -> &'a str {
    let start = output
        .find(&format!("fn {}ListTags(", title_case(service)))
        .unwrap_or_else(|| panic!("no function for {}", service));
    let rest = &output[start..];
    match rest[1..].find("pub async fn ") {
        Some(end) => &rest[..end + 1],
        None => rest,
    }
}

#[test]
fn test_one_function_per_service() {
    let output = ListTagsGenerator::new().unwrap().generate().unwrap();

    assert_eq!(output.matches("pub async fn ").count(), SERVICE_NAMES.len());
    for service in SERVICE_NAMES {
        let signature = format!("fn {}ListTags(", title_case(service));
        assert_eq!(
            output.matches(&signature).count(),
            1,
            "expected exactly one {}",
            signature
        );
    }
}

#[test]
fn test_functions_in_sorted_order() {
    let output = ListTagsGenerator::new().unwrap().generate().unwrap();

    let positions: Vec<usize> = sorted_service_names()
        .iter()
        .map(|s| output.find(&format!("fn {}ListTags(", title_case(s))).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_generation_is_idempotent() {
    let first = ListTagsGenerator::new().unwrap().generate().unwrap();
    let second = ListTagsGenerator::new().unwrap().generate().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generation_is_order_independent() {
    let mut reversed: Vec<&str> = SERVICE_NAMES.to_vec();
    reversed.reverse();

    let from_table = ListTagsGenerator::new().unwrap().generate().unwrap();
    let from_reversed = ListTagsGenerator::with_services(reversed)
        .unwrap()
        .generate()
        .unwrap();
    assert_eq!(from_table, from_reversed);
}

#[test]
fn test_header_and_preamble() {
    let output = ListTagsGenerator::new().unwrap().generate().unwrap();
    assert!(output.starts_with(FILE_HEADER));
    assert!(output.contains("#![allow(non_snake_case)]"));
    assert!(output.contains("use super::*;"));
}

#[test]
fn test_kms_function() {
    let output = ListTagsGenerator::new().unwrap().generate().unwrap();
    let kms = function_body(&output, "kms");

    assert!(kms.contains("conn: &aws_sdk_kms::Client"));
    assert!(kms.contains("identifier: &str"));
    assert!(!kms.contains("resource_type"));
    assert!(kms.contains(".list_resource_tags()"));
    assert!(kms.contains(".key_id(identifier)"));
    assert!(kms.contains("aws_sdk_kms::Error"));
    assert!(kms.contains("KmsKeyValueTags(output.tags)"));
    assert!(output.contains("/// KmsListTags lists kms service tags."));
}

#[test]
fn test_route53_function() {
    let output = ListTagsGenerator::new().unwrap().generate().unwrap();
    let route53 = function_body(&output, "route53");

    assert!(route53.contains("resource_type: &str"));
    assert!(route53.contains(".list_tags_for_resource()"));
    assert!(route53.contains(".resource_id(identifier)"));
    assert!(route53.contains(".resource_type(resource_type.into())"));
    assert!(!route53.contains(".resource_type(resource_type)"));
    assert!(route53.contains("resource_tag_set"));
}

#[test]
fn test_ssm_function() {
    let output = ListTagsGenerator::new().unwrap().generate().unwrap();
    let ssm = function_body(&output, "ssm");

    assert!(ssm.contains("conn: &aws_sdk_ssm::Client"));
    assert!(ssm.contains("resource_type: &str"));
    assert!(ssm.contains(".list_tags_for_resource()"));
    assert!(ssm.contains(".resource_id(identifier)"));
    assert!(ssm.contains(".resource_type(resource_type.into())"));
    assert!(ssm.contains("SsmKeyValueTags(output.tag_list)"));
}

#[test]
fn test_resource_type_is_converted_to_sdk_enum() {
    let output = ListTagsGenerator::with_services(["route53", "ssm", "kms"])
        .unwrap()
        .generate()
        .unwrap();

    assert_eq!(output.matches(".resource_type(resource_type.into())").count(), 2);
    assert_eq!(output.matches(".resource_type(resource_type)").count(), 0);
}

#[test]
fn test_slice_identifier_function() {
    let output = ListTagsGenerator::new().unwrap().generate().unwrap();
    let elbv2 = function_body(&output, "elbv2");

    assert!(elbv2.contains("aws_sdk_elasticloadbalancingv2::Client"));
    assert!(elbv2.contains(".describe_tags()"));
    assert!(elbv2.contains(".set_resource_arns("));
    assert!(!elbv2.contains(".resource_arns(identifier)"));
    assert!(elbv2.contains("tag_descriptions"));
}

#[test]
fn test_acronym_identifier_field() {
    let output = ListTagsGenerator::new().unwrap().generate().unwrap();
    let es = function_body(&output, "elasticsearchservice");

    assert!(es.contains("aws_sdk_elasticsearch::Client"));
    assert!(es.contains(".list_tags()"));
    assert!(es.contains(".arn(identifier)"));
    assert!(es.contains("output.tag_list"));
}

#[test]
fn test_unknown_service_gets_defaults() {
    let output = ListTagsGenerator::with_services(["example"])
        .unwrap()
        .generate()
        .unwrap();

    assert!(output.contains("fn ExampleListTags("));
    assert!(output.contains("aws_sdk_example::Client"));
    assert!(output.contains(".list_tags_for_resource()"));
    assert!(output.contains(".resource_arn(identifier)"));
    assert!(output.contains("ExampleKeyValueTags(output.tags)"));
}

#[test]
fn test_invalid_service_name_is_format_error() {
    let generator = ListTagsGenerator::with_services(["kms", "bad name"]).unwrap();
    let result = generator.generate();
    assert!(
        matches!(result, Err(GeneratorError::Format(_))),
        "expected format error, got {:?}",
        result.map(|s| s.len())
    );
}

#[test]
fn test_write_to_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join(DEFAULT_OUTPUT);
    fs::write(&output_path, "stale contents that are much longer than nothing").unwrap();

    let generator = ListTagsGenerator::new().unwrap();
    generator.write_to(&output_path).unwrap();

    let written = fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, generator.generate().unwrap());
    assert!(!written.contains("stale contents"));
}

#[test]
fn test_generate_list_tags_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join(DEFAULT_OUTPUT);

    let result = generate_list_tags(&output_path);
    assert!(result.is_ok(), "Generation failed: {:?}", result);
    assert!(output_path.exists(), "{} should exist", DEFAULT_OUTPUT);
}

#[test]
fn test_write_to_missing_directory_is_write_error() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("missing").join(DEFAULT_OUTPUT);

    let result = ListTagsGenerator::new().unwrap().write_to(&output_path);
    match result {
        Err(GeneratorError::Write { path, .. }) => assert_eq!(path, output_path),
        other => panic!("expected write error, got {:?}", other),
    }
}

#[test]
fn test_is_up_to_date() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join(DEFAULT_OUTPUT);
    let generator = ListTagsGenerator::new().unwrap();

    assert!(!generator.is_up_to_date(&output_path).unwrap());

    generator.write_to(&output_path).unwrap();
    assert!(generator.is_up_to_date(&output_path).unwrap());

    let mut edited = fs::read_to_string(&output_path).unwrap();
    edited.push_str("\n// hand edit\n");
    fs::write(&output_path, edited).unwrap();
    assert!(!generator.is_up_to_date(&output_path).unwrap());
}

#[test]
fn test_is_up_to_date_unreadable_path_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join(DEFAULT_OUTPUT);
    fs::create_dir(&output_path).unwrap();

    let result = ListTagsGenerator::new().unwrap().is_up_to_date(&output_path);
    match result {
        Err(GeneratorError::Read { path, .. }) => assert_eq!(path, output_path),
        other => panic!("expected read error, got {:?}", other),
    }
}
