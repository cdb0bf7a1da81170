//! Field layouts of the site's outreach forms.
//!
//! Each form is a fixed list of fields. A field is free text, a select with a
//! closed set of option values, a checkbox group, or a yes/no flag. Required
//! fields are presence-checked on submit.

use std::fmt;

use serde::Serialize;

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Single choice among option values.
    Select(&'static [&'static str]),
    /// Any number of choices among option values.
    Checkboxes(&'static [&'static str]),
    Flag,
}

/// One field of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: false,
        }
    }

    const fn select(name: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::Select(options),
            required: false,
        }
    }

    const fn checkboxes(name: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FieldKind::Checkboxes(options),
            required: false,
        }
    }

    const fn flag(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Flag,
            required: false,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Everything that varies between forms.
#[derive(Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub kind: FormKind,
    pub fields: &'static [FieldSpec],
    /// Label used when logging a submission.
    pub log_label: &'static str,
    pub success_title: &'static str,
    pub success_description: &'static str,
    /// Whether the validation toast is shown as an error.
    pub destructive_validation: bool,
}

impl FormSchema {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldSpec)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.name == name)
    }

    /// Names of the required fields, in form order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
    }
}

// ---------------------------------------------------------------------------
// FormKind
// ---------------------------------------------------------------------------

/// The forms on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    ApplyForHelp,
    DeviceDonation,
    MonetaryDonation,
    Volunteer,
    Partner,
    Contact,
}

impl FormKind {
    pub const ALL: [FormKind; 6] = [
        FormKind::ApplyForHelp,
        FormKind::DeviceDonation,
        FormKind::MonetaryDonation,
        FormKind::Volunteer,
        FormKind::Partner,
        FormKind::Contact,
    ];

    pub fn schema(self) -> &'static FormSchema {
        match self {
            FormKind::ApplyForHelp => &APPLY_FOR_HELP,
            FormKind::DeviceDonation => &DEVICE_DONATION,
            FormKind::MonetaryDonation => &MONETARY_DONATION,
            FormKind::Volunteer => &VOLUNTEER,
            FormKind::Partner => &PARTNER,
            FormKind::Contact => &CONTACT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormKind::ApplyForHelp => "apply-for-help",
            FormKind::DeviceDonation => "device-donation",
            FormKind::MonetaryDonation => "monetary-donation",
            FormKind::Volunteer => "volunteer",
            FormKind::Partner => "partner",
            FormKind::Contact => "contact",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Option lists
// ---------------------------------------------------------------------------

const APPLICANT_CATEGORIES: &[&str] =
    &["student", "job-seeker", "parent", "senior", "disabled", "other"];
const INTERNET_ACCESS: &[&str] = &["yes", "limited", "no", "mobile-only"];
const HOUSEHOLD_INCOME: &[&str] =
    &["under-25k", "25k-50k", "50k-75k", "over-75k", "prefer-not-to-say"];
const HOUSEHOLD_SIZE: &[&str] = &["1", "2", "3", "4", "5+"];

const DEVICE_TYPES: &[&str] = &["laptop", "desktop", "tablet", "parts", "other"];
const DEVICE_CONDITIONS: &[&str] = &["working", "minor-issues", "major-issues", "broken", "unknown"];
const DEVICE_AGES: &[&str] = &["0-2", "3-5", "6-8", "9+", "unknown"];
const HANDOVER: &[&str] = &["pickup", "dropoff", "either"];

const AGE_RANGES: &[&str] = &["16-17", "18-24", "25-34", "35-44", "45-54", "55-64", "65+"];
const AVAILABILITY: &[&str] = &[
    "weekday-morning",
    "weekday-afternoon",
    "weekday-evening",
    "weekend-morning",
    "weekend-afternoon",
    "weekend-evening",
    "flexible",
];
pub const VOLUNTEER_SKILLS: &[&str] = &[
    "Computer Repair/Hardware",
    "Software Installation",
    "Data Recovery",
    "Quality Testing",
    "Customer Service",
    "Event Planning",
    "Social Media/Marketing",
    "Photography/Videography",
    "Logistics/Transportation",
    "Teaching/Training",
];
pub const VOLUNTEER_INTERESTS: &[&str] = &[
    "Laptop Refurbishment",
    "Community Outreach",
    "Collection Events",
    "Distribution Events",
    "Training Recipients",
    "Administrative Support",
    "Social Media Content",
    "Fundraising Events",
    "Partnership Development",
    "Environmental Education",
];
const TRANSPORTATION: &[&str] = &["yes", "public", "limited", "need-help"];

const ORGANIZATION_TYPES: &[&str] = &[
    "corporation",
    "nonprofit",
    "school",
    "government",
    "foundation",
    "community",
    "other",
];
const ORGANIZATION_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-1000", "1000+"];
pub const PARTNERSHIP_INTERESTS: &[&str] = &[
    "Device Donation Programs",
    "Employee Volunteer Programs",
    "Financial Sponsorship",
    "Collection Event Hosting",
    "Distribution Partnership",
    "Technical Expertise Sharing",
    "Student/Client Referrals",
    "Marketing & Promotion",
    "Grant Writing Collaboration",
    "Educational Workshops",
];
pub const PARTNER_RESOURCES: &[&str] = &[
    "Meeting/Event Space",
    "Transportation/Logistics",
    "Technical Equipment",
    "Marketing/Communications",
    "Volunteer Network",
    "Financial Contributions",
    "Expertise/Consulting",
    "Student/Client Access",
    "Government Connections",
    "Media Relationships",
];
const PARTNERSHIP_TIMELINES: &[&str] =
    &["immediate", "short-term", "medium-term", "long-term", "flexible"];

const CONTACT_CATEGORIES: &[&str] = &[
    "general",
    "donation",
    "volunteer",
    "partnership",
    "application",
    "support",
    "media",
    "other",
];

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

static APPLY_FOR_HELP: FormSchema = FormSchema {
    kind: FormKind::ApplyForHelp,
    fields: &[
        FieldSpec::text("fullName").required(),
        FieldSpec::text("email").required(),
        FieldSpec::text("phone"),
        FieldSpec::text("address"),
        FieldSpec::text("city"),
        FieldSpec::text("state"),
        FieldSpec::text("zipCode"),
        FieldSpec::select("category", APPLICANT_CATEGORIES).required(),
        FieldSpec::text("currentSituation").required(),
        FieldSpec::text("howWillHelp"),
        FieldSpec::select("hasInternet", INTERNET_ACCESS),
        FieldSpec::select("householdIncome", HOUSEHOLD_INCOME),
        FieldSpec::select("householdSize", HOUSEHOLD_SIZE),
        FieldSpec::text("additionalInfo"),
    ],
    log_label: "Application submitted",
    success_title: "Application Submitted Successfully!",
    success_description:
        "We'll review your application and get back to you within 5-7 business days.",
    destructive_validation: false,
};

static DEVICE_DONATION: FormSchema = FormSchema {
    kind: FormKind::DeviceDonation,
    fields: &[
        FieldSpec::text("donationType"),
        FieldSpec::text("fullName").required(),
        FieldSpec::text("email").required(),
        FieldSpec::text("phone"),
        FieldSpec::text("address"),
        FieldSpec::text("city"),
        FieldSpec::text("state"),
        FieldSpec::text("zipCode"),
        FieldSpec::select("deviceType", DEVICE_TYPES).required(),
        FieldSpec::select("deviceCondition", DEVICE_CONDITIONS),
        FieldSpec::select("deviceAge", DEVICE_AGES),
        FieldSpec::text("quantity"),
        FieldSpec::text("additionalInfo"),
        FieldSpec::select("pickupPreferred", HANDOVER),
    ],
    log_label: "Device donation submitted",
    success_title: "Donation Request Submitted!",
    success_description:
        "We'll contact you within 2-3 business days to arrange pickup or drop-off.",
    destructive_validation: true,
};

static MONETARY_DONATION: FormSchema = FormSchema {
    kind: FormKind::MonetaryDonation,
    fields: &[
        FieldSpec::text("amount").required(),
        FieldSpec::text("fullName").required(),
        FieldSpec::text("email").required(),
        FieldSpec::flag("isRecurring"),
    ],
    log_label: "Monetary donation submitted",
    success_title: "Thank you for your donation!",
    success_description: "Your contribution helps us refurbish more laptops for those in need.",
    destructive_validation: true,
};

static VOLUNTEER: FormSchema = FormSchema {
    kind: FormKind::Volunteer,
    fields: &[
        FieldSpec::text("fullName").required(),
        FieldSpec::text("email").required(),
        FieldSpec::text("phone").required(),
        FieldSpec::text("address"),
        FieldSpec::text("city"),
        FieldSpec::text("state"),
        FieldSpec::text("zipCode"),
        FieldSpec::select("age", AGE_RANGES),
        FieldSpec::select("availability", AVAILABILITY),
        FieldSpec::checkboxes("skills", VOLUNTEER_SKILLS).required(),
        FieldSpec::checkboxes("interests", VOLUNTEER_INTERESTS),
        FieldSpec::text("experience"),
        FieldSpec::text("motivation"),
        FieldSpec::text("additionalInfo"),
        FieldSpec::select("hasTransportation", TRANSPORTATION),
        FieldSpec::text("emergencyContact"),
        FieldSpec::text("emergencyPhone"),
    ],
    log_label: "Volunteer application submitted",
    success_title: "Volunteer Application Submitted!",
    success_description:
        "We'll review your application and contact you within 3-5 business days for next steps.",
    destructive_validation: false,
};

static PARTNER: FormSchema = FormSchema {
    kind: FormKind::Partner,
    fields: &[
        FieldSpec::select("organizationType", ORGANIZATION_TYPES),
        FieldSpec::text("organizationName").required(),
        FieldSpec::text("contactName").required(),
        FieldSpec::text("title"),
        FieldSpec::text("email").required(),
        FieldSpec::text("phone"),
        FieldSpec::text("website"),
        FieldSpec::text("address"),
        FieldSpec::text("city"),
        FieldSpec::text("state"),
        FieldSpec::text("zipCode"),
        FieldSpec::select("organizationSize", ORGANIZATION_SIZES),
        FieldSpec::checkboxes("partnershipInterests", PARTNERSHIP_INTERESTS).required(),
        FieldSpec::checkboxes("resources", PARTNER_RESOURCES),
        FieldSpec::select("timeline", PARTNERSHIP_TIMELINES),
        FieldSpec::text("description"),
        FieldSpec::text("goals"),
        FieldSpec::text("additionalInfo"),
    ],
    log_label: "Partnership application submitted",
    success_title: "Partnership Application Submitted!",
    success_description: "We'll review your proposal and schedule a meeting within 5-7 business \
                          days to discuss collaboration opportunities.",
    destructive_validation: true,
};

static CONTACT: FormSchema = FormSchema {
    kind: FormKind::Contact,
    fields: &[
        FieldSpec::text("name").required(),
        FieldSpec::text("email").required(),
        FieldSpec::text("phone"),
        FieldSpec::text("subject").required(),
        FieldSpec::select("category", CONTACT_CATEGORIES),
        FieldSpec::text("message").required(),
    ],
    log_label: "Contact form submitted",
    success_title: "Message Sent Successfully!",
    success_description: "We'll get back to you within 1-2 business days.",
    destructive_validation: true,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn schemas_compare_by_value() {
        assert_eq!(FormKind::Contact.schema(), FormKind::Contact.schema());
        assert_ne!(FormKind::Contact.schema(), FormKind::Partner.schema());
    }

    #[test]
    fn schemas_match_their_kind() {
        for kind in FormKind::ALL {
            assert_eq!(kind.schema().kind, kind);
        }
    }

    #[test]
    fn field_names_unique_per_form() {
        for kind in FormKind::ALL {
            let names: HashSet<_> = kind.schema().fields.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), kind.schema().fields.len(), "{kind}");
        }
    }

    #[test]
    fn apply_for_help_required_fields() {
        let required: Vec<_> = FormKind::ApplyForHelp.schema().required_fields().collect();
        assert_eq!(
            required,
            vec!["fullName", "email", "category", "currentSituation"]
        );
    }

    #[test]
    fn volunteer_requires_a_skill() {
        let (_, spec) = FormKind::Volunteer.schema().field("skills").unwrap();
        assert!(spec.required);
        assert_eq!(spec.kind, FieldKind::Checkboxes(VOLUNTEER_SKILLS));
    }

    #[test]
    fn field_lookup_reports_index() {
        let (index, spec) = FormKind::Contact.schema().field("subject").unwrap();
        assert_eq!(index, 3);
        assert!(spec.required);
        assert!(FormKind::Contact.schema().field("fax").is_none());
    }

    #[test]
    fn kind_names_are_kebab_case() {
        assert_eq!(FormKind::MonetaryDonation.to_string(), "monetary-donation");
        assert_eq!(
            serde_json::to_string(&FormKind::ApplyForHelp).unwrap(),
            "\"apply-for-help\""
        );
    }
}
