use soroban_sdk::{Env, String};

const GROUP_ID_PREFIX: &[u8] = b"GROUP-";
// "GROUP-" plus the 20 digits of u64::MAX.
const GROUP_ID_MAX_LEN: usize = 26;

/// Renders a group id for display as `GROUP-{id}` (decimal, no padding).
pub fn format_group_id(env: &Env, group_id: u64) -> String {
    let mut buf = [0u8; GROUP_ID_MAX_LEN];
    let len = write_group_id(&mut buf, group_id);
    String::from_bytes(env, &buf[..len])
}

fn write_group_id(buf: &mut [u8; GROUP_ID_MAX_LEN], group_id: u64) -> usize {
    buf[..GROUP_ID_PREFIX.len()].copy_from_slice(GROUP_ID_PREFIX);

    let mut digits = [0u8; 20];
    let mut n = group_id;
    let mut count = 0;
    loop {
        digits[count] = b'0' + (n % 10) as u8;
        count += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }

    let mut len = GROUP_ID_PREFIX.len();
    for digit in digits[..count].iter().rev() {
        buf[len] = *digit;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_group_id_zero() {
        let env = Env::default();
        assert_eq!(format_group_id(&env, 0), String::from_str(&env, "GROUP-0"));
    }

    #[test]
    fn test_format_group_id_no_padding() {
        let env = Env::default();
        assert_eq!(format_group_id(&env, 7), String::from_str(&env, "GROUP-7"));
        assert_eq!(format_group_id(&env, 1000), String::from_str(&env, "GROUP-1000"));
    }

    #[test]
    fn test_format_group_id_max_value() {
        let env = Env::default();
        assert_eq!(
            format_group_id(&env, u64::MAX),
            String::from_str(&env, "GROUP-18446744073709551615")
        );
    }
}
