use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Message type reported to the conversion service as `sourceFormat`.
///
/// The set is closed: anything the sniffer cannot place ends up as
/// [`MessageTypeTag::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageTypeTag {
    #[serde(rename = "ADT")]
    Adt,
    #[serde(rename = "ORU")]
    Oru,
    #[serde(rename = "ORM")]
    Orm,
    #[serde(rename = "MDM")]
    Mdm,
    #[serde(rename = "RDE")]
    Rde,
    #[serde(rename = "DFT")]
    Dft,
    #[serde(rename = "SIU")]
    Siu,
    #[serde(rename = "EDI_837")]
    Edi837,
    #[serde(rename = "EDI_835")]
    Edi835,
    #[serde(rename = "EDI_270")]
    Edi270,
    #[serde(rename = "EDI_271")]
    Edi271,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFamily {
    Hl7v2,
    X12Edi,
    Unrecognized,
}

impl fmt::Display for FormatFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormatFamily::Hl7v2 => "HL7 v2",
            FormatFamily::X12Edi => "X12 EDI",
            FormatFamily::Unrecognized => "unrecognized",
        })
    }
}

/// Display metadata attached to each tag.
#[derive(Debug, Clone, Copy)]
pub struct TagInfo {
    pub display_name: &'static str,
    pub description: &'static str,
    pub family: FormatFamily,
    pub fhir_resources: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message type '{0}'")]
pub struct UnknownTagError(pub String);

impl MessageTypeTag {
    pub const ALL: [MessageTypeTag; 12] = [
        MessageTypeTag::Adt,
        MessageTypeTag::Oru,
        MessageTypeTag::Orm,
        MessageTypeTag::Mdm,
        MessageTypeTag::Rde,
        MessageTypeTag::Dft,
        MessageTypeTag::Siu,
        MessageTypeTag::Edi837,
        MessageTypeTag::Edi835,
        MessageTypeTag::Edi270,
        MessageTypeTag::Edi271,
        MessageTypeTag::Unknown,
    ];

    /// Used for HL7 messages whose MSH-9 cannot be read.
    pub const HL7_DEFAULT: MessageTypeTag = MessageTypeTag::Adt;
    /// Used for interchanges without a recognised `ST` transaction set.
    pub const EDI_DEFAULT: MessageTypeTag = MessageTypeTag::Edi837;
    pub const FALLBACK: MessageTypeTag = MessageTypeTag::Unknown;

    pub fn as_str(self) -> &'static str {
        match self {
            MessageTypeTag::Adt => "ADT",
            MessageTypeTag::Oru => "ORU",
            MessageTypeTag::Orm => "ORM",
            MessageTypeTag::Mdm => "MDM",
            MessageTypeTag::Rde => "RDE",
            MessageTypeTag::Dft => "DFT",
            MessageTypeTag::Siu => "SIU",
            MessageTypeTag::Edi837 => "EDI_837",
            MessageTypeTag::Edi835 => "EDI_835",
            MessageTypeTag::Edi270 => "EDI_270",
            MessageTypeTag::Edi271 => "EDI_271",
            MessageTypeTag::Unknown => "UNKNOWN",
        }
    }

    pub fn family(self) -> FormatFamily {
        self.info().family
    }

    /// Map an HL7 MSH-9 message code (the part before `^`) onto a tag.
    pub fn from_hl7_category(category: &str) -> MessageTypeTag {
        MessageTypeTag::ALL
            .into_iter()
            .find(|tag| tag.family() == FormatFamily::Hl7v2 && tag.as_str() == category)
            .unwrap_or(MessageTypeTag::FALLBACK)
    }

    pub fn info(self) -> TagInfo {
        match self {
            MessageTypeTag::Adt => TagInfo {
                display_name: "Admission, Discharge, Transfer",
                description: "Patient demographics, visit information, and administrative events",
                family: FormatFamily::Hl7v2,
                fhir_resources: &["Patient", "Encounter", "Organization"],
            },
            MessageTypeTag::Oru => TagInfo {
                display_name: "Observational Result Unsolicited",
                description: "Laboratory results, diagnostic reports, and clinical observations",
                family: FormatFamily::Hl7v2,
                fhir_resources: &["Patient", "Observation", "DiagnosticReport", "Practitioner"],
            },
            MessageTypeTag::Orm => TagInfo {
                display_name: "Order Message",
                description: "Laboratory orders, service requests, and clinical orders",
                family: FormatFamily::Hl7v2,
                fhir_resources: &["Patient", "ServiceRequest", "Practitioner"],
            },
            MessageTypeTag::Mdm => TagInfo {
                display_name: "Medical Document Management",
                description: "Clinical document notifications and transcribed reports",
                family: FormatFamily::Hl7v2,
                fhir_resources: &["Patient", "DocumentReference", "Practitioner"],
            },
            MessageTypeTag::Rde => TagInfo {
                display_name: "Pharmacy Encoded Order",
                description: "Medication orders sent from order entry to pharmacy",
                family: FormatFamily::Hl7v2,
                fhir_resources: &["Patient", "MedicationRequest", "Medication", "Practitioner"],
            },
            MessageTypeTag::Dft => TagInfo {
                display_name: "Detailed Financial Transaction",
                description: "Patient charges and billing transactions",
                family: FormatFamily::Hl7v2,
                fhir_resources: &["Patient", "ChargeItem", "Encounter", "Account"],
            },
            MessageTypeTag::Siu => TagInfo {
                display_name: "Scheduling Information Unsolicited",
                description: "Appointment booking, rescheduling, and cancellation notices",
                family: FormatFamily::Hl7v2,
                fhir_resources: &["Patient", "Appointment", "Schedule", "Practitioner"],
            },
            MessageTypeTag::Edi837 => TagInfo {
                display_name: "Healthcare Claims (837P/837I)",
                description: "Professional and institutional healthcare claim submissions",
                family: FormatFamily::X12Edi,
                fhir_resources: &[
                    "Patient",
                    "Organization",
                    "Claim",
                    "Coverage",
                    "Practitioner",
                    "Procedure",
                ],
            },
            MessageTypeTag::Edi835 => TagInfo {
                display_name: "Healthcare Payment & Remittance (835)",
                description: "Healthcare claim payment and remittance advice",
                family: FormatFamily::X12Edi,
                fhir_resources: &[
                    "Patient",
                    "PaymentNotice",
                    "ExplanationOfBenefit",
                    "Organization",
                    "PaymentReconciliation",
                ],
            },
            MessageTypeTag::Edi270 => TagInfo {
                display_name: "Healthcare Eligibility Inquiry (270)",
                description: "Healthcare eligibility, coverage, or benefits inquiry",
                family: FormatFamily::X12Edi,
                fhir_resources: &[
                    "Patient",
                    "Coverage",
                    "CoverageEligibilityRequest",
                    "Organization",
                    "Practitioner",
                ],
            },
            MessageTypeTag::Edi271 => TagInfo {
                display_name: "Healthcare Eligibility Response (271)",
                description: "Healthcare eligibility, coverage, or benefits response",
                family: FormatFamily::X12Edi,
                fhir_resources: &[
                    "Patient",
                    "Coverage",
                    "CoverageEligibilityResponse",
                    "Organization",
                    "InsurancePlan",
                ],
            },
            MessageTypeTag::Unknown => TagInfo {
                display_name: "Unrecognized format",
                description: "Input did not look like HL7 v2 or X12 EDI",
                family: FormatFamily::Unrecognized,
                fhir_resources: &[],
            },
        }
    }
}

impl fmt::Display for MessageTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageTypeTag {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MessageTypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTagError(wanted.to_string()))
    }
}
