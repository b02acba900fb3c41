use crate::sniff::tag::MessageTypeTag;

const EDI_PREFIX: &str = "ISA*";
const HL7_PREFIX: &str = "MSH|";
/// MSH-9, counting the segment name as field 0.
const HL7_MESSAGE_TYPE_FIELD: usize = 8;

// Checked in this order; the first marker present wins regardless of its
// position in the text.
const EDI_TRANSACTION_MARKERS: [(&str, MessageTypeTag); 4] = [
    ("ST*837*", MessageTypeTag::Edi837),
    ("ST*835*", MessageTypeTag::Edi835),
    ("ST*270*", MessageTypeTag::Edi270),
    ("ST*271*", MessageTypeTag::Edi271),
];

/// Guess the message type of a pasted HL7 v2 or X12 EDI message.
///
/// Never fails: empty or unrecognisable input yields
/// [`MessageTypeTag::FALLBACK`].
pub fn classify(raw: &str) -> MessageTypeTag {
    let text = raw.trim();

    let tag = if text.starts_with(EDI_PREFIX) {
        classify_edi(text)
    } else if text.starts_with(HL7_PREFIX) {
        classify_hl7(text)
    } else {
        MessageTypeTag::FALLBACK
    };

    tracing::debug!(tag = %tag, len = text.len(), "classified message");
    tag
}

fn classify_edi(text: &str) -> MessageTypeTag {
    EDI_TRANSACTION_MARKERS
        .iter()
        .find(|(marker, _)| text.contains(marker))
        .map(|(_, tag)| *tag)
        .unwrap_or(MessageTypeTag::EDI_DEFAULT)
}

fn classify_hl7(text: &str) -> MessageTypeTag {
    first_line(text)
        .split('|')
        .nth(HL7_MESSAGE_TYPE_FIELD)
        .and_then(|field| field.split_once('^'))
        .map(|(category, _)| MessageTypeTag::from_hl7_category(category))
        .unwrap_or(MessageTypeTag::HL7_DEFAULT)
}

fn first_line(text: &str) -> &str {
    let delimiter = if text.contains('\n') { '\n' } else { '\r' };
    text.split(delimiter).next().unwrap_or(text)
}
