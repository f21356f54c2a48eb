//! Service table and per-service tag listing attributes
//!
//! Every attribute has one default and a small set of per-service overrides.
//! The resolvers are total: a service missing from the overrides table gets
//! the default, whether or not it appears in [`SERVICE_NAMES`].

use serde::Serialize;

/// Services that get a generated tag listing function
pub const SERVICE_NAMES: &[&str] = &[
    "accessanalyzer",
    "acm",
    "acmpca",
    "amplify",
    "appmesh",
    "appstream",
    "appsync",
    "athena",
    "backup",
    "cloudhsmv2",
    "cloudtrail",
    "cloudwatch",
    "cloudwatchevents",
    "cloudwatchlogs",
    "codecommit",
    "codedeploy",
    "codepipeline",
    "cognitoidentity",
    "cognitoidentityprovider",
    "configservice",
    "databasemigrationservice",
    "dataexchange",
    "datasync",
    "dax",
    "devicefarm",
    "directconnect",
    "directoryservice",
    "dlm",
    "docdb",
    "dynamodb",
    "ecr",
    "ecs",
    "efs",
    "eks",
    "elasticache",
    "elasticbeanstalk",
    "elasticsearchservice",
    "elbv2",
    "firehose",
    "fsx",
    "glue",
    "guardduty",
    "greengrass",
    "imagebuilder",
    "inspector",
    "iot",
    "iotanalytics",
    "iotevents",
    "kafka",
    "kinesis",
    "kinesisanalytics",
    "kinesisanalyticsv2",
    "kms",
    "lambda",
    "licensemanager",
    "mediaconnect",
    "mediaconvert",
    "medialive",
    "mediapackage",
    "mediastore",
    "mq",
    "neptune",
    "opsworks",
    "organizations",
    "qldb",
    "rds",
    "resourcegroups",
    "route53",
    "route53resolver",
    "sagemaker",
    "securityhub",
    "sfn",
    "sns",
    "sqs",
    "ssm",
    "storagegateway",
    "swf",
    "transfer",
    "waf",
    "wafregional",
    "wafv2",
    "workspaces",
];

const DEFAULT_LIST_TAGS_FUNCTION: &str = "ListTagsForResource";
const DEFAULT_IDENTIFIER_FIELD: &str = "ResourceArn";
const DEFAULT_TAGS_FIELD: &str = "Tags";
const SDK_CRATE_PREFIX: &str = "aws_sdk_";

/// Per-service departures from the default attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOverrides {
    /// SDK crate suffix when it differs from the service name
    pub sdk_crate: Option<&'static str>,
    pub list_tags_function: Option<&'static str>,
    pub identifier_field: Option<&'static str>,
    pub identifier_requires_slice: bool,
    pub resource_type_field: Option<&'static str>,
    pub tags_field: Option<&'static str>,
}

impl ServiceOverrides {
    pub const NONE: ServiceOverrides = ServiceOverrides {
        sdk_crate: None,
        list_tags_function: None,
        identifier_field: None,
        identifier_requires_slice: false,
        resource_type_field: None,
        tags_field: None,
    };

    /// Overrides for a service, or [`ServiceOverrides::NONE`]
    pub fn lookup(service_name: &str) -> &'static ServiceOverrides {
        OVERRIDES
            .binary_search_by(|(name, _)| (*name).cmp(service_name))
            .map(|i| &OVERRIDES[i].1)
            .unwrap_or(&ServiceOverrides::NONE)
    }
}

/// Sorted by service name; looked up with a binary search.
static OVERRIDES: &[(&str, ServiceOverrides)] = &[
    (
        "acm",
        ServiceOverrides {
            list_tags_function: Some("ListTagsForCertificate"),
            identifier_field: Some("CertificateArn"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "acmpca",
        ServiceOverrides {
            list_tags_function: Some("ListTags"),
            identifier_field: Some("CertificateAuthorityArn"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "athena",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "backup",
        ServiceOverrides {
            list_tags_function: Some("ListTags"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "cloudhsmv2",
        ServiceOverrides {
            list_tags_function: Some("ListTags"),
            identifier_field: Some("ResourceId"),
            tags_field: Some("TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "cloudtrail",
        ServiceOverrides {
            list_tags_function: Some("ListTags"),
            identifier_field: Some("ResourceIdList"),
            identifier_requires_slice: true,
            tags_field: Some("ResourceTagList[0].TagsList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "cloudwatch",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "cloudwatchevents",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "cloudwatchlogs",
        ServiceOverrides {
            list_tags_function: Some("ListTagsLogGroup"),
            identifier_field: Some("LogGroupName"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "configservice",
        ServiceOverrides {
            sdk_crate: Some("config"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "databasemigrationservice",
        ServiceOverrides {
            tags_field: Some("TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "dax",
        ServiceOverrides {
            list_tags_function: Some("ListTags"),
            identifier_field: Some("ResourceName"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "devicefarm",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "directconnect",
        ServiceOverrides {
            list_tags_function: Some("DescribeTags"),
            identifier_field: Some("ResourceArns"),
            identifier_requires_slice: true,
            tags_field: Some("ResourceTags[0].Tags"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "directoryservice",
        ServiceOverrides {
            identifier_field: Some("ResourceId"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "docdb",
        ServiceOverrides {
            identifier_field: Some("ResourceName"),
            tags_field: Some("TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "dynamodb",
        ServiceOverrides {
            list_tags_function: Some("ListTagsOfResource"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "efs",
        ServiceOverrides {
            list_tags_function: Some("DescribeTags"),
            identifier_field: Some("FileSystemId"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "elasticache",
        ServiceOverrides {
            identifier_field: Some("ResourceName"),
            tags_field: Some("TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "elasticbeanstalk",
        ServiceOverrides {
            tags_field: Some("ResourceTags"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "elasticsearchservice",
        ServiceOverrides {
            sdk_crate: Some("elasticsearch"),
            list_tags_function: Some("ListTags"),
            identifier_field: Some("ARN"),
            tags_field: Some("TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "elbv2",
        ServiceOverrides {
            sdk_crate: Some("elasticloadbalancingv2"),
            list_tags_function: Some("DescribeTags"),
            identifier_field: Some("ResourceArns"),
            identifier_requires_slice: true,
            tags_field: Some("TagDescriptions[0].Tags"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "firehose",
        ServiceOverrides {
            list_tags_function: Some("ListTagsForDeliveryStream"),
            identifier_field: Some("DeliveryStreamName"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "fsx",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "glue",
        ServiceOverrides {
            list_tags_function: Some("GetTags"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "kinesis",
        ServiceOverrides {
            list_tags_function: Some("ListTagsForStream"),
            identifier_field: Some("StreamName"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "kinesisanalytics",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "kinesisanalyticsv2",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "kms",
        ServiceOverrides {
            list_tags_function: Some("ListResourceTags"),
            identifier_field: Some("KeyId"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "lambda",
        ServiceOverrides {
            list_tags_function: Some("ListTags"),
            identifier_field: Some("Resource"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "mediaconvert",
        ServiceOverrides {
            identifier_field: Some("Arn"),
            tags_field: Some("ResourceTags.Tags"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "mediastore",
        ServiceOverrides {
            identifier_field: Some("Resource"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "mq",
        ServiceOverrides {
            list_tags_function: Some("ListTags"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "neptune",
        ServiceOverrides {
            identifier_field: Some("ResourceName"),
            tags_field: Some("TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "opsworks",
        ServiceOverrides {
            list_tags_function: Some("ListTags"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "organizations",
        ServiceOverrides {
            identifier_field: Some("ResourceId"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "rds",
        ServiceOverrides {
            identifier_field: Some("ResourceName"),
            tags_field: Some("TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "redshift",
        ServiceOverrides {
            list_tags_function: Some("DescribeTags"),
            identifier_field: Some("ResourceName"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "resourcegroups",
        ServiceOverrides {
            list_tags_function: Some("GetTags"),
            identifier_field: Some("Arn"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "route53",
        ServiceOverrides {
            identifier_field: Some("ResourceId"),
            resource_type_field: Some("ResourceType"),
            tags_field: Some("ResourceTagSet.Tags"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "sagemaker",
        ServiceOverrides {
            list_tags_function: Some("ListTags"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "sqs",
        ServiceOverrides {
            list_tags_function: Some("ListQueueTags"),
            identifier_field: Some("QueueUrl"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "ssm",
        ServiceOverrides {
            identifier_field: Some("ResourceId"),
            resource_type_field: Some("ResourceType"),
            tags_field: Some("TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "storagegateway",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "transfer",
        ServiceOverrides {
            identifier_field: Some("Arn"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "waf",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            tags_field: Some("TagInfoForResource.TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "wafregional",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            tags_field: Some("TagInfoForResource.TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "wafv2",
        ServiceOverrides {
            identifier_field: Some("ResourceARN"),
            tags_field: Some("TagInfoForResource.TagList"),
            ..ServiceOverrides::NONE
        },
    ),
    (
        "workspaces",
        ServiceOverrides {
            list_tags_function: Some("DescribeTags"),
            identifier_field: Some("ResourceId"),
            tags_field: Some("TagList"),
            ..ServiceOverrides::NONE
        },
    ),
];

/// The service table, sorted to keep generated output stable
pub fn sorted_service_names() -> Vec<&'static str> {
    let mut names = SERVICE_NAMES.to_vec();
    names.sort_unstable();
    names
}

/// Whether a name is part of the compiled-in service table
pub fn is_known_service(service_name: &str) -> bool {
    SERVICE_NAMES.contains(&service_name)
}

/// Tag listing API operation, e.g. `ListTagsForResource`
pub fn list_tags_function(service_name: &str) -> &'static str {
    ServiceOverrides::lookup(service_name)
        .list_tags_function
        .unwrap_or(DEFAULT_LIST_TAGS_FUNCTION)
}

/// Input member that receives the resource identifier
pub fn identifier_field(service_name: &str) -> &'static str {
    ServiceOverrides::lookup(service_name)
        .identifier_field
        .unwrap_or(DEFAULT_IDENTIFIER_FIELD)
}

/// Whether the identifier member is a list rather than a scalar
pub fn identifier_requires_slice(service_name: &str) -> bool {
    ServiceOverrides::lookup(service_name).identifier_requires_slice
}

/// Input member carrying the resource type, for APIs that need one
pub fn resource_type_field(service_name: &str) -> Option<&'static str> {
    ServiceOverrides::lookup(service_name).resource_type_field
}

/// Path to the tags in the output shape, e.g. `ResourceTagSet.Tags`
pub fn tags_field(service_name: &str) -> &'static str {
    ServiceOverrides::lookup(service_name)
        .tags_field
        .unwrap_or(DEFAULT_TAGS_FIELD)
}

/// Rust SDK crate path, e.g. `aws_sdk_kms`
pub fn sdk_crate(service_name: &str) -> String {
    let suffix = ServiceOverrides::lookup(service_name)
        .sdk_crate
        .unwrap_or(service_name);
    format!("{}{}", SDK_CRATE_PREFIX, suffix)
}

/// Rust SDK client type, e.g. `aws_sdk_kms::Client`
pub fn client_type(service_name: &str) -> String {
    format!("{}::Client", sdk_crate(service_name))
}

/// Fully resolved attributes for one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceAttributes {
    pub name: String,
    pub sdk_crate: String,
    pub client_type: String,
    pub list_tags_function: &'static str,
    pub identifier_field: &'static str,
    pub identifier_requires_slice: bool,
    pub resource_type_field: Option<&'static str>,
    pub tags_field: &'static str,
}

impl ServiceAttributes {
    /// Resolve every attribute for a service name
    pub fn resolve(service_name: &str) -> Self {
        Self {
            name: service_name.to_string(),
            sdk_crate: sdk_crate(service_name),
            client_type: client_type(service_name),
            list_tags_function: list_tags_function(service_name),
            identifier_field: identifier_field(service_name),
            identifier_requires_slice: identifier_requires_slice(service_name),
            resource_type_field: resource_type_field(service_name),
            tags_field: tags_field(service_name),
        }
    }
}
