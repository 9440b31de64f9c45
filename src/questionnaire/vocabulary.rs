// src/questionnaire/vocabulary.rs
// Answer code -> descriptive clause tables, one per questionnaire dimension

const AGE: &[(&str, &str)] = &[
    ("under18", "أقل من 18 سنة"),
    ("18-25", "18-25 سنة"),
    ("26-35", "26-35 سنة"),
    ("36-50", "36-50 سنة"),
    ("over50", "أكثر من 50 سنة"),
];

const MARITAL_STATUS: &[(&str, &str)] = &[
    ("single", "أعزب/عزباء"),
    ("married", "متزوج/متزوجة"),
    ("divorced", "مطلق/مطلقة"),
    ("widowed", "أرمل/أرملة"),
];

const PRAYER_COMMITMENT: &[(&str, &str)] = &[
    ("always", "يصلي دائماً"),
    ("mostly", "يصلي في أغلب الأوقات"),
    ("sometimes", "يصلي أحياناً"),
    ("rarely", "يصلي نادراً"),
    ("no", "لا يصلي حالياً"),
];

const REMEMBRANCE_PRACTICE: &[(&str, &str)] = &[
    ("always", "يقرأ الأذكار بانتظام"),
    ("sometimes", "يقرأ الأذكار أحياناً"),
    ("rarely", "يقرأ الأذكار نادراً"),
    ("no", "لا يقرأ الأذكار"),
];

const MENTAL_STATE: &[(&str, &str)] = &[
    ("good", "حالة نفسية جيدة"),
    ("moderate", "حالة نفسية متوسطة"),
    ("struggling", "يمر بصعوبات نفسية"),
    ("difficult", "حالة نفسية صعبة"),
];

/// One questionnaire dimension. Declaration order is the order clauses
/// appear in an assembled prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Age,
    MaritalStatus,
    PrayerCommitment,
    RemembrancePractice,
    MentalState,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Age,
        Dimension::MaritalStatus,
        Dimension::PrayerCommitment,
        Dimension::RemembrancePractice,
        Dimension::MentalState,
    ];

    pub fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Dimension::Age => AGE,
            Dimension::MaritalStatus => MARITAL_STATUS,
            Dimension::PrayerCommitment => PRAYER_COMMITMENT,
            Dimension::RemembrancePractice => REMEMBRANCE_PRACTICE,
            Dimension::MentalState => MENTAL_STATE,
        }
    }

    /// Heading used for this dimension in the person-information block
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Age => "العمر",
            Dimension::MaritalStatus => "الحالة الاجتماعية",
            Dimension::PrayerCommitment => "علاقته بالصلاة والعبادة",
            Dimension::RemembrancePractice => "قراءة الأذكار",
            Dimension::MentalState => "حالته النفسية الآن",
        }
    }

    /// Wire name of the questionnaire field this dimension is read from
    pub fn field_name(self) -> &'static str {
        match self {
            Dimension::Age => "age",
            Dimension::MaritalStatus => "maritalStatus",
            Dimension::PrayerCommitment => "prayerCommitment",
            Dimension::RemembrancePractice => "dhikrPractice",
            Dimension::MentalState => "mentalState",
        }
    }

    pub fn lookup(self, code: &str) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, clause)| *clause)
    }

    /// Clause for `code`, or the code itself when the table has no entry.
    pub fn resolve<'a>(self, code: &'a str) -> &'a str {
        self.lookup(code).unwrap_or(code)
    }
}
