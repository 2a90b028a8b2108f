use serde::Serialize;

/// A single clinic location.
///
/// The directory is fixed at deployment time and never mutated, so records
/// are plain `&'static str` fields shared freely across handlers.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub services: &'static str,
    /// Forward Sortation Area: first three characters of the postal code,
    /// uppercase, no spaces.
    pub postal_code: &'static str,
}

impl Location {
    /// Render the record as the single-line block returned to callers.
    pub fn formatted(&self) -> String {
        format!(
            "{} - {}. Phone: {}. Services: {}.",
            self.name, self.address, self.phone, self.services
        )
    }
}

/// The full clinic directory, in presentation order.
pub const LOCATIONS: &[Location] = &[
    Location {
        name: "MedRehab Group Richmond Hill",
        address: "955 Major Mackenzie Dr. West, Unit 106, Vaughan L6A 4P9",
        phone: "(905) 417-4499",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "L6A",
    },
    Location {
        name: "MedRehab Group Brampton",
        address: "10 Earlsbridge Blvd, Brampton L7A 3P1",
        phone: "(905) 970-0101",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "L7A",
    },
    Location {
        name: "MedRehab Group Georgetown",
        address: "99 Sinclair Ave #110, Halton Hills L7G 5G1",
        phone: "(905) 877-5900",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "L7G",
    },
    Location {
        name: "MedRehab Group Pickering",
        address: "1105 Kingston Rd #11, Pickering L1V 1B5",
        phone: "(905) 837-5000",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "L1V",
    },
    Location {
        name: "MedRehab Group Toronto",
        address: "1670 Dufferin St. Suite B03, Toronto M6H 3M2",
        phone: "(416) 656-6800",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "M6H",
    },
    Location {
        name: "MedRehab Group Woodbridge",
        address: "8333 Weston Rd., Woodbridge L4L 8E2",
        phone: "(905) 264-6311",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "L4L",
    },
    Location {
        name: "MedRehab Group Hamilton",
        address: "631 Queenston Road, Suite 302, Hamilton L8K 6R5",
        phone: "(905) 561-6500",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "L8K",
    },
    Location {
        name: "MedRehab Group North York",
        address: "1275 Finch Avenue West, North York M3J 2B1",
        phone: "(416) 628-8858",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "M3J",
    },
    Location {
        name: "MedRehab Group Vaughan",
        address: "10395 Weston Rd., Woodbridge L4H 3T4",
        phone: "905-265-8966",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "L4H",
    },
    Location {
        name: "MedRehab Group Concord",
        address: "80 Bass Pro Mills Drive, Concord L4K 5W9",
        phone: "905-798-1165",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "L4K",
    },
    Location {
        name: "MedRehab Group Newmarket",
        address: "181 Green Ln East #2 East Gwillimbury, East Gwillimbury L9N 0C9",
        phone: "289-319-0867",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "L9N",
    },
    Location {
        name: "MedRehab Brampton West",
        address: "305 Royal West Drive Unit H, Brampton L6X5K8",
        phone: "647-925-6833",
        services: "Massage Therapy, Physiotherapy, and Chiropractic Care",
        postal_code: "L6X",
    },
];

/// Normalize caller input into an FSA prefix: uppercase, spaces stripped,
/// truncated to three characters. Shorter input yields a shorter prefix.
pub fn fsa_prefix(postal_code: &str) -> String {
    postal_code
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_uppercase())
        .take(3)
        .collect()
}

/// All directory records whose FSA starts with `prefix`, in directory order.
pub fn find_by_prefix(prefix: &str) -> Vec<&'static Location> {
    LOCATIONS
        .iter()
        .filter(|loc| loc.postal_code.starts_with(prefix))
        .collect()
}
