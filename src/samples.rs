//! Built-in sample messages offered by the demo.

use crate::sniff::MessageTypeTag;

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    /// Selection key; always the wire string of `tag`.
    pub key: &'static str,
    pub tag: MessageTypeTag,
    pub name: &'static str,
    pub description: &'static str,
    pub data: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        key: "ADT",
        tag: MessageTypeTag::Adt,
        name: "Patient Admission (ADT)",
        description: "Patient demographics and visit information",
        data: "\
MSH|^~\\&|SENDING_APP|SENDING_FACILITY|RECEIVING_APP|RECEIVING_FACILITY|20231215120000||ADT^A01|12345|P|2.5|||AL|NE|
EVN|A01|20231215120000|||
PID|1||123456789|0123456|Doe^John^A||19800315|M||C|123 Main St^^Springfield^IL^62701||555-123-4567|||M|NON|123456789|
PV1|1|I|2000^2012^01||||123456^Smith^John^A|||SUR||||2|A0|",
    },
    Sample {
        key: "ORU",
        tag: MessageTypeTag::Oru,
        name: "Lab Results (ORU)",
        description: "Laboratory test results with observations",
        data: "\
MSH|^~\\&|LAB_SYSTEM|LAB_FACILITY|EMR|HOSPITAL|20231215143000||ORU^R01|98765|P|2.5|||AL|NE|
PID|1||987654321|0123456|Smith^Jane^M||19750522|F||C|456 Oak Ave^^Chicago^IL^60601||312-555-8901|||S|NON|987654321|
OBR|1|12345|67890|80061^LIPID PANEL^CPT||20231215090000|20231215093000|||DR^Jones^Sarah|||20231215093000||||||20231215143000|||F|||
OBX|1|NM|13457-7^LDL CHOLESTEROL^LOINC||125|mg/dL|<130|N|||F|||20231215143000|
OBX|2|NM|2093-3^TOTAL CHOLESTEROL^LOINC||200|mg/dL|<200|N|||F|||20231215143000|",
    },
    Sample {
        key: "ORM",
        tag: MessageTypeTag::Orm,
        name: "Clinical Order (ORM)",
        description: "Laboratory orders and service requests",
        data: "\
MSH|^~\\&|CPOE|HOSPITAL|LAB|LAB|20231215100000||ORM^O01|54321|P|2.5|||AL|NE|
PID|1||135792468||Johnson^Robert^L||19650810|M||B|789 Pine St^^Boston^MA^02101||617-555-2345|||M|NON|135792468|
ORC|NW|ORD-12345||||||20231215100000||DOC^Smith^Michael|||
OBR|1|ORD-12345||85025^COMPLETE BLOOD COUNT^CPT||20231215100000|||||||||DOC^Smith^Michael||||||||||ROUTINE|",
    },
    Sample {
        key: "EDI_837",
        tag: MessageTypeTag::Edi837,
        name: "EDI 837 Healthcare Claims",
        description: "Professional healthcare claims submission",
        data: "\
ISA*00*          *00*          *ZZ*SUBMITTER      *ZZ*RECEIVER       *241122*1430*^*00501*000000001*0*T*:~
GS*HC*SENDER*RECEIVER*20241122*1430*1*X*005010X222A1~
ST*837*0001*005010X222A1~
BHT*0019*00*1*20241122*1430*CH~
NM1*41*2*ACME HEALTHCARE*****46*TIN123456789~
CLM*CLAIM001*100.00***11:B:1*Y*A*Y*I~
NM1*71*1*SMITH*JOHN****XX*1234567890~
SV1*HC:99213*75.00*UN*1***1~",
    },
    Sample {
        key: "EDI_835",
        tag: MessageTypeTag::Edi835,
        name: "EDI 835 Payment & Remittance",
        description: "Healthcare claim payment and remittance advice",
        data: "\
ISA*00*          *00*          *ZZ*PAYER          *ZZ*PROVIDER       *241122*1430*^*00501*000000001*0*T*:~
GS*HP*PAYER*PROVIDER*20241122*1430*1*X*005010X221A1~
ST*835*0001*005010X221A1~
BPR*I*1500.00*C*ACH*CCP*01*999999999*DA*123456789****20241122~
TRN*1*12345*1234567890~
N1*PR*BLUE CROSS BLUE SHIELD*XX*87654321~
CLP*CLAIM001*1*100.00*85.00**MC*CLAIM001*11~
SVC*HC:99213*75.00*70.00**1~
CAS*CO*45*5.00~
SE*9*0001~
GE*1*1~
IEA*1*000000001~",
    },
    Sample {
        key: "EDI_270",
        tag: MessageTypeTag::Edi270,
        name: "EDI 270 Eligibility Inquiry",
        description: "Healthcare eligibility, coverage, or benefits inquiry",
        data: "\
ISA*00*          *00*          *ZZ*SUBMITTER      *ZZ*RECEIVER       *241122*1430*^*00501*000000001*0*T*:~
GS*HS*SENDER*RECEIVER*20241122*1430*1*X*005010X279A1~
ST*270*0001*005010X279A1~
BHT*0022*13*10001234*20241122*1430~
HL*1**20*1~
NM1*PR*2*BLUE CROSS*****PI*12345~
HL*2*1*21*1~
NM1*1P*1*PROVIDER*JOHN****XX*1234567890~
HL*3*2*22*0~
TRN*1*93175-012547*9877281234~
NM1*IL*1*DOE*JANE****MI*123456789~
DMG*D8*19800315*F~
DTP*291*D8*20241122~",
    },
    Sample {
        key: "EDI_271",
        tag: MessageTypeTag::Edi271,
        name: "EDI 271 Eligibility Response",
        description: "Healthcare eligibility, coverage, or benefits response",
        data: "\
ISA*00*          *00*          *ZZ*RECEIVER       *ZZ*SUBMITTER      *241122*1430*^*00501*000000001*0*T*:~
GS*HB*RECEIVER*SUBMITTER*20241122*1430*1*X*005010X279A1~
ST*271*0001*005010X279A1~
BHT*0022*11*10001234*20241122*1430~
HL*1**20*1~
NM1*PR*2*BLUE CROSS BLUE SHIELD*****PI*87654321~
NM1*IL*1*DOE*JANE****MI*MEMBER123~
INS*Y*18*001*25*A***FT~
EB*1*FAM*30**27~
MSG*MEMBER IS ELIGIBLE FOR COVERED SERVICES~
SE*9*0001~
GE*1*1~
IEA*1*000000001~",
    },
];

pub fn find_sample(key: &str) -> Option<&'static Sample> {
    let key = key.trim();
    SAMPLES
        .iter()
        .find(|sample| sample.key.eq_ignore_ascii_case(key))
}
