use chrono::{Datelike, NaiveDate};

use crate::model::{Address, Contact, Id};

const AVATAR_COLORS: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9",
];

pub fn find_by_id(contacts: &[Contact], id: Id<Contact>) -> Option<&Contact> {
    contacts.iter().find(|c| c.id == id)
}

/// Contacts whose gender matches `gender` (case-insensitive). None keeps all.
pub fn filter_by_gender<'a>(contacts: &'a [Contact], gender: Option<&str>) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|c| gender.map_or(true, |g| c.gender.eq_ignore_ascii_case(g)))
        .collect()
}

/// First letter of each name, upper-cased.
pub fn initials(contact: &Contact) -> String {
    contact
        .first_name
        .chars()
        .take(1)
        .chain(contact.last_name.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Placeholder avatar colour, stable for a given first name.
pub fn avatar_color(contact: &Contact) -> &'static str {
    let code = contact.first_name.chars().next().map_or(0, |c| c as usize);
    AVATAR_COLORS[code % AVATAR_COLORS.len()]
}

/// "street, city, state postal" with empty parts left out.
pub fn format_address(address: &Address) -> String {
    let region = [address.state.as_str(), address.postal_code.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    [address.address.as_str(), address.city.as_str(), region.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses the directory's `YYYY-M-D` birth date.
pub fn birthday(contact: &Contact) -> Option<NaiveDate> {
    let mut parts = contact.birth_date.trim().splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Age reported by the directory, else derived from the birth date.
pub fn age_on(contact: &Contact, today: NaiveDate) -> Option<u32> {
    if contact.age.is_some() {
        return contact.age;
    }
    let born = birthday(contact)?;
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}
