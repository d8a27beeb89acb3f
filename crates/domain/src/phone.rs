const COUNTRY_CODE: &str = "+212";
const NATIONAL_NUMBER_LEN: usize = 9;

/// Groups a moroccan number as `+212 XXX XXX XXX`.
///
/// Anything that is not the country code followed by exactly nine digits
/// is returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    match phone.strip_prefix(COUNTRY_CODE) {
        Some(number)
            if number.len() == NATIONAL_NUMBER_LEN
                && number.bytes().all(|b| b.is_ascii_digit()) =>
        {
            format!(
                "{} {} {} {}",
                COUNTRY_CODE,
                &number[..3],
                &number[3..6],
                &number[6..]
            )
        }
        _ => phone.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_groups_national_numbers() {
        assert_eq!(format_phone_number("+212537123456"), "+212 537 123 456");
        assert_eq!(format_phone_number("+212661000000"), "+212 661 000 000");
    }

    #[test]
    fn it_passes_through_other_numbers() {
        for phone in [
            "",
            "0537123456",
            "+21253712345",
            "+2125371234567",
            "+33612345678",
            "+212 537 123 456",
            "+212537l23456",
        ] {
            assert_eq!(format_phone_number(phone), phone);
        }
    }
}
