//! Static emergency reference data: helpline numbers and safety tips.

/// An emergency helpline shown on the contacts screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyContact {
    /// Translation key for the display name
    pub name_key: &'static str,
    /// Literal number handed to the dialer
    pub number: &'static str,
}

impl EmergencyContact {
    /// `tel:` URI for the platform dialer handoff
    #[must_use]
    pub fn dial_uri(&self) -> String {
        format!("tel:{}", self.number)
    }
}

pub const EMERGENCY_CONTACTS: [EmergencyContact; 5] = [
    EmergencyContact {
        name_key: "nationalEmergency",
        number: "112",
    },
    EmergencyContact {
        name_key: "police",
        number: "100",
    },
    EmergencyContact {
        name_key: "fire",
        number: "101",
    },
    EmergencyContact {
        name_key: "ambulance",
        number: "108",
    },
    EmergencyContact {
        name_key: "disasterManagement",
        number: "1078",
    },
];

/// Look up a contact by its number or translation key (case-insensitive).
pub fn find_contact(query: &str) -> Option<&'static EmergencyContact> {
    let query = query.trim();
    EMERGENCY_CONTACTS.iter().find(|contact| {
        contact.number == query || contact.name_key.eq_ignore_ascii_case(query)
    })
}

/// A group of safety tips for one kind of disaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyTopic {
    /// Stable identifier used on the command line
    pub id: &'static str,
    /// Translation key for the section title
    pub title_key: &'static str,
    pub tips: &'static [&'static str],
}

pub const SAFETY_TOPICS: [SafetyTopic; 4] = [
    SafetyTopic {
        id: "flood",
        title_key: "floodSafety",
        tips: &[
            "Move immediately to higher ground or upper floors",
            "Avoid walking or driving through flood waters",
            "Stay away from electrical wires and equipment",
            "Listen to emergency broadcasts for updates",
            "Keep emergency supplies ready (water, food, flashlight)",
            "Do not drink flood water - use bottled or boiled water only",
        ],
    },
    SafetyTopic {
        id: "earthquake",
        title_key: "earthquakeSafety",
        tips: &[
            "Drop, Cover, and Hold On during shaking",
            "Stay away from windows, mirrors, and heavy objects",
            "If outdoors, move away from buildings and power lines",
            "Do not run outside during shaking",
            "After shaking stops, check for injuries and hazards",
            "Be prepared for aftershocks",
        ],
    },
    SafetyTopic {
        id: "fire",
        title_key: "fireSafety",
        tips: &[
            "Stay low to avoid smoke inhalation",
            "Test doors before opening - if hot, find another exit",
            "Never use elevators during a fire",
            "Have an evacuation plan and meeting point",
            "Call fire department immediately",
            "Stop, Drop, and Roll if clothes catch fire",
        ],
    },
    SafetyTopic {
        id: "general",
        title_key: "generalEmergency",
        tips: &[
            "Keep important documents in waterproof container",
            "Maintain emergency contact list",
            "Store emergency supplies (3 days minimum)",
            "Know your evacuation routes",
            "Keep battery-powered radio and flashlight",
            "Learn basic first aid and CPR",
        ],
    },
];

pub fn find_topic(id: &str) -> Option<&'static SafetyTopic> {
    let id = id.trim();
    SAFETY_TOPICS
        .iter()
        .find(|topic| topic.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contacts_keep_reference_numbers() {
        let numbers: Vec<_> = EMERGENCY_CONTACTS.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec!["112", "100", "101", "108", "1078"]);
    }

    #[test]
    fn dial_uri_uses_tel_scheme() {
        assert_eq!(EMERGENCY_CONTACTS[0].dial_uri(), "tel:112");
    }

    #[test]
    fn find_contact_by_number_or_key() {
        assert_eq!(find_contact("108").unwrap().name_key, "ambulance");
        assert_eq!(find_contact("Police").unwrap().number, "100");
        assert!(find_contact("999").is_none());
    }

    #[test]
    fn every_topic_has_six_tips() {
        assert!(SAFETY_TOPICS.iter().all(|topic| topic.tips.len() == 6));
        assert_eq!(find_topic("EARTHQUAKE").unwrap().title_key, "earthquakeSafety");
        assert!(find_topic("tsunami").is_none());
    }
}
