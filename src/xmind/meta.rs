//! meta.xml generation.
//!
//! The metadata part only records when the map was created and by whom.

use super::constants::{DEFAULT_CREATOR, NS_META, XML_DECLARATION, XMAP_VERSION};
use crate::common::escape_xml;
use chrono::{Local, NaiveDateTime};

/// Layout of `create-time`: local time, seconds resolution
pub const CREATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generate meta.xml stamped with the current local time.
pub fn make_metadata() -> Vec<u8> {
    make_metadata_with_creator(DEFAULT_CREATOR)
}

/// Generate meta.xml for the current local time and a given creator name.
pub fn make_metadata_with_creator(creator: &str) -> Vec<u8> {
    make_metadata_at(Local::now().naive_local(), creator)
}

/// Generate meta.xml for a fixed creation time.
pub fn make_metadata_at(created: NaiveDateTime, creator: &str) -> Vec<u8> {
    format!(
        r#"{XML_DECLARATION}
<meta xmlns="{NS_META}" version="{XMAP_VERSION}">
  <create-time>{}</create-time>
  <creator>
    <name>{}</name>
  </creator>
</meta>
"#,
        created.format(CREATE_TIME_FORMAT),
        escape_xml(creator)
    )
    .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 42))
            .expect("valid date")
    }

    #[test]
    fn test_fixed_time_document() {
        let xml = String::from_utf8(make_metadata_at(fixed_time(), "Tester")).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <meta xmlns=\"urn:xmind:xmap:xmlns:meta:2.0\" version=\"2.0\">\n\
             \x20 <create-time>2024-03-09 07:05:42</create-time>\n\
             \x20 <creator>\n\
             \x20   <name>Tester</name>\n\
             \x20 </creator>\n\
             </meta>\n"
        );
    }

    #[test]
    fn test_default_creator_and_timestamp_shape() {
        let xml = String::from_utf8(make_metadata()).unwrap();
        assert!(xml.contains("<name>GitHub Action</name>"));
        let start = xml.find("<create-time>").unwrap() + "<create-time>".len();
        let end = xml.find("</create-time>").unwrap();
        let stamp = &xml[start..end];
        assert!(NaiveDateTime::parse_from_str(stamp, CREATE_TIME_FORMAT).is_ok());
    }

    #[test]
    fn test_creator_is_escaped() {
        let xml = String::from_utf8(make_metadata_at(fixed_time(), "R&D <bot>")).unwrap();
        assert!(xml.contains("<name>R&amp;D &lt;bot&gt;</name>"));
    }
}
