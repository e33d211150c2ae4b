//! Static location and form tables used by the listing forms.

pub const STATES: &[&str] = &[
    "Andhra Pradesh", "Arunachal Pradesh", "Assam", "Bihar", "Chhattisgarh",
    "Goa", "Gujarat", "Haryana", "Himachal Pradesh", "Jharkhand",
    "Karnataka", "Kerala", "Madhya Pradesh", "Maharashtra", "Manipur",
    "Meghalaya", "Mizoram", "Nagaland", "Odisha", "Punjab",
    "Rajasthan", "Sikkim", "Tamil Nadu", "Telangana", "Tripura",
    "Uttar Pradesh", "Uttarakhand", "West Bengal", "Andaman and Nicobar Islands",
    "Chandigarh", "Dadra and Nagar Haveli", "Daman and Diu", "Delhi", "Lakshadweep",
    "Puducherry",
];

pub const CITIES_BY_STATE: &[(&str, &[&str])] = &[
    ("Andhra Pradesh", &["Visakhapatnam", "Vijayawada", "Guntur", "Tirupati", "Nellore"]),
    ("Arunachal Pradesh", &["Itanagar", "Dibruggarh", "Naharlagun"]),
    ("Assam", &["Guwahati", "Silchar", "Dibrugarh", "Jorhat", "Barpeta"]),
    ("Bihar", &["Patna", "Gaya", "Bhagalpur", "Muzaffarpur", "Darbhanga"]),
    ("Chhattisgarh", &["Raipur", "Bilaspur", "Durg", "Rajnandgaon", "Raigarh"]),
    ("Goa", &["Panaji", "Margao", "Vasco da Gama", "Mapusa", "Ponda"]),
    ("Gujarat", &["Ahmedabad", "Surat", "Vadodara", "Rajkot", "Jamnagar", "Gandhinagar"]),
    ("Haryana", &["Faridabad", "Gurgaon", "Hisar", "Panipat", "Rohtak", "Chandigarh"]),
    ("Himachal Pradesh", &["Shimla", "Solan", "Mandi", "Kangra", "Kullu"]),
    ("Jharkhand", &["Ranchi", "Jamshedpur", "Dhanbad", "Giridih", "Bokaro"]),
    ("Karnataka", &["Bangalore", "Mysore", "Mangalore", "Belgaum", "Davangere", "Udupi"]),
    ("Kerala", &["Kochi", "Thiruvananthapuram", "Kannur", "Alappuzha", "Kozhikode"]),
    ("Madhya Pradesh", &["Bhopal", "Indore", "Jabalpur", "Gwalior", "Ujjain"]),
    ("Maharashtra", &["Mumbai", "Pune", "Nagpur", "Aurangabad", "Nashik", "Solapur"]),
    ("Manipur", &["Imphal", "Bishnupur", "Thoubal", "Ukhrul"]),
    ("Meghalaya", &["Shillong", "Tura", "Jowai", "Nongstoin"]),
    ("Mizoram", &["Aizawl", "Lunglei", "Saiha", "Champhai"]),
    ("Nagaland", &["Kohima", "Dimapur", "Mokokchung", "Zunheboto"]),
    ("Odisha", &["Bhubaneswar", "Cuttack", "Rourkela", "Berhampur", "Sambalpur"]),
    ("Punjab", &["Chandigarh", "Ludhiana", "Amritsar", "Patiala", "Jalandhar"]),
    ("Rajasthan", &["Jaipur", "Jodhpur", "Udaipur", "Ajmer", "Bikaner"]),
    ("Sikkim", &["Gangtok", "Pelling", "Yuksom", "Namchi"]),
    ("Tamil Nadu", &["Chennai", "Coimbatore", "Madurai", "Salem", "Tiruchirappalli"]),
    ("Telangana", &["Hyderabad", "Warangal", "Nizamabad", "Karimnagar"]),
    ("Tripura", &["Agartala", "Udaipur", "Ambassa", "Kailashahar"]),
    ("Uttar Pradesh", &["Lucknow", "Kanpur", "Ghaziabad", "Agra", "Varanasi", "Meerut"]),
    ("Uttarakhand", &["Dehradun", "Haridwar", "Rishikesh", "Almora", "Nainital"]),
    ("West Bengal", &["Kolkata", "Howrah", "Durgapur", "Siliguri", "Asansol"]),
    ("Andaman and Nicobar Islands", &["Port Blair", "Car Nicobar"]),
    ("Chandigarh", &["Chandigarh"]),
    ("Dadra and Nagar Haveli", &["Silvassa", "Dadra"]),
    ("Daman and Diu", &["Daman", "Diu"]),
    ("Delhi", &["New Delhi", "Delhi"]),
    ("Lakshadweep", &["Kavaratti", "Agatti"]),
    ("Puducherry", &["Puducherry", "Yanam", "Mahe", "Karaikal"]),
];

/// One representative postal code per state.
pub const STATE_ZIP_CODES: &[(&str, &str)] = &[
    ("Andhra Pradesh", "530001"),
    ("Arunachal Pradesh", "790001"),
    ("Assam", "781001"),
    ("Bihar", "800001"),
    ("Chhattisgarh", "492001"),
    ("Goa", "403001"),
    ("Gujarat", "380001"),
    ("Haryana", "121001"),
    ("Himachal Pradesh", "171001"),
    ("Jharkhand", "814101"),
    ("Karnataka", "560001"),
    ("Kerala", "682001"),
    ("Madhya Pradesh", "452001"),
    ("Maharashtra", "400001"),
    ("Manipur", "795001"),
    ("Meghalaya", "793001"),
    ("Mizoram", "796001"),
    ("Nagaland", "797001"),
    ("Odisha", "753001"),
    ("Punjab", "160001"),
    ("Rajasthan", "302001"),
    ("Sikkim", "737001"),
    ("Tamil Nadu", "600001"),
    ("Telangana", "500001"),
    ("Tripura", "799001"),
    ("Uttar Pradesh", "210001"),
    ("Uttarakhand", "248001"),
    ("West Bengal", "700001"),
    ("Andaman and Nicobar Islands", "744101"),
    ("Chandigarh", "160001"),
    ("Dadra and Nagar Haveli", "396521"),
    ("Daman and Diu", "362210"),
    ("Delhi", "110001"),
    ("Lakshadweep", "682551"),
    ("Puducherry", "605001"),
];

/// `(value, label)` pairs for the quantity unit select.
pub const UNITS: &[(&str, &str)] = &[
    ("kg", "Kg"),
    ("lbs", "Lbs"),
    ("pieces", "Pieces"),
    ("liters", "Liters"),
    ("portions", "Portions"),
];

/// Cities known for `state`; unknown or empty states have none.
pub fn cities_for(state: &str) -> &'static [&'static str] {
    CITIES_BY_STATE
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

pub fn zip_code_for(state: &str) -> Option<&'static str> {
    STATE_ZIP_CODES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, zip)| *zip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_cities_and_a_zip_code() {
        for state in STATES {
            assert!(!cities_for(state).is_empty(), "no cities for {state}");
            assert!(zip_code_for(state).is_some(), "no zip code for {state}");
        }
        assert_eq!(CITIES_BY_STATE.len(), STATES.len());
    }

    #[test]
    fn unknown_state_has_no_cities() {
        assert!(cities_for("").is_empty());
        assert!(cities_for("Atlantis").is_empty());
        assert_eq!(zip_code_for("Atlantis"), None);
    }

    #[test]
    fn lookups_are_exact() {
        assert_eq!(cities_for("Maharashtra")[1], "Pune");
        assert_eq!(zip_code_for("Delhi"), Some("110001"));
    }
}
