//! Client address documents (`Adressen/*.XML`).

use roxmltree::Node;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

use super::fields::{decode_boolean, decode_float, decode_text};
use super::xml::{child, children, parse_document, read_document};
use super::list_documents;
use crate::config::CLIENT_EXTENSION;
use crate::error::Result;
use crate::model::{AdditionalAddress, Address, ClientProfile, ClientSettings, DeliverySchedule};

/// Load every client document in `dir`, keyed by client number.
///
/// Files that fail to parse are logged and skipped. Documents without an `Adresse`
/// record or without a client number are skipped silently.
pub fn load_clients(dir: &Path) -> BTreeMap<String, ClientProfile> {
    info!("Loading client data...");
    let mut clients = BTreeMap::new();

    for path in list_documents(dir, CLIENT_EXTENSION) {
        match parse_client_file(&path) {
            Ok(Some(client)) => {
                clients.insert(client.client_number.clone(), client);
            }
            Ok(None) => debug!("No client record in {}", path.display()),
            Err(e) => warn!("Error parsing {}: {}", path.display(), e),
        }
    }

    info!("Loaded {} clients", clients.len());
    clients
}

/// Parse a single client document.
pub fn parse_client_file(path: &Path) -> Result<Option<ClientProfile>> {
    let text = read_document(path)?;
    let doc = parse_document(path, &text)?;
    Ok(parse_client(doc.root_element()))
}

/// Map the `Adresse` record below `root` to a profile.
pub fn parse_client(root: Node<'_, '_>) -> Option<ClientProfile> {
    let record = child(root, "Adresse")?;
    let client_number = decode_text(child(record, "AdrNr"));
    if client_number.is_empty() {
        return None;
    }

    let text = |name: &str| decode_text(child(record, name));
    let flag = |name: &str| decode_boolean(&text(name));

    let additional_addresses = child(record, "AnschriftenListe")
        .map(|list| {
            children(list, "Anschriften")
                .map(parse_additional_address)
                .collect()
        })
        .unwrap_or_default();

    Some(ClientProfile {
        client_number,
        search_term: text("SuchBeg"),
        status: text("Status"),
        tax_number: text("SteuNr"),
        vat_id: text("UStId"),
        is_blocked: flag("GspKz"),
        price_group: text("ArtPrGrp"),
        billing_address: parse_address(record, "Re_"),
        delivery_address: parse_address(record, "Li_"),
        delivery_schedule: DeliverySchedule {
            monday: text("Sel12"),
            tuesday: text("Sel13"),
            wednesday: text("Sel14"),
            thursday: text("Sel15"),
            friday: text("Sel16"),
            saturday: text("Sel17"),
        },
        settings: ClientSettings {
            webshop_enabled: flag("Sel70"),
            ds_addresses: flag("Sel29"),
            no_pickup_app: flag("Sel91"),
            minimum_order_value: decode_float(&text("Sel94")),
            articles_not_in_history: text("Sel18"),
        },
        additional_addresses,
    })
}

/// Address fields share their names apart from the `Re_`/`Li_` prefix.
fn parse_address(node: Node<'_, '_>, prefix: &str) -> Address {
    let text = |name: &str| decode_text(child(node, &format!("{}{}", prefix, name)));
    Address {
        salutation: text("Na1"),
        name: text("Na2"),
        name3: text("Na3"),
        street: text("Str"),
        city: text("Ort"),
        postal_code: text("Plz"),
        country: text("Land"),
        phone: text("Tel"),
        fax: text("Fax"),
        email: text("Email1"),
    }
}

fn parse_additional_address(node: Node<'_, '_>) -> AdditionalAddress {
    let text = |name: &str| decode_text(child(node, name));
    AdditionalAddress {
        address_number: text("AnsNr"),
        address: parse_address(node, ""),
        is_default_billing: decode_boolean(&text("StdReKz")),
        is_default_delivery: decode_boolean(&text("StdLiKz")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CLIENT_XML: &str = r#"<Export>
  <Adresse>
    <AdrNr><![CDATA[1001]]></AdrNr>
    <SuchBeg><![CDATA[PIZZERIA ROMA]]></SuchBeg>
    <Status><![CDATA[Aktiv]]></Status>
    <GspKz><![CDATA[Nein]]></GspKz>
    <Re_Na1><![CDATA[Firma]]></Re_Na1>
    <Re_Na2><![CDATA[Pizzeria Roma GmbH]]></Re_Na2>
    <Re_Str><![CDATA[Hauptstraße 5]]></Re_Str>
    <Re_Ort><![CDATA[Köln]]></Re_Ort>
    <Re_Plz><![CDATA[50667]]></Re_Plz>
    <Li_Na2><![CDATA[Roma Lager]]></Li_Na2>
    <Sel12><![CDATA[Ja]]></Sel12>
    <Sel13><![CDATA[]]></Sel13>
    <Sel70><![CDATA[Ja]]></Sel70>
    <Sel94><![CDATA[150,50]]></Sel94>
    <AnschriftenListe>
      <Anschriften>
        <AnsNr><![CDATA[1]]></AnsNr>
        <Na2><![CDATA[Filiale Nord]]></Na2>
        <StdReKz><![CDATA[Ja]]></StdReKz>
        <StdLiKz><![CDATA[Ja]]></StdLiKz>
      </Anschriften>
      <Anschriften>
        <AnsNr><![CDATA[2]]></AnsNr>
        <Na2><![CDATA[Filiale Süd]]></Na2>
      </Anschriften>
    </AnschriftenListe>
  </Adresse>
</Export>"#;

    fn parse(xml: &str) -> Option<ClientProfile> {
        let doc = roxmltree::Document::parse(xml).unwrap();
        parse_client(doc.root_element())
    }

    #[test]
    fn test_parse_client_fields() {
        let client = parse(CLIENT_XML).unwrap();
        assert_eq!(client.client_number, "1001");
        assert_eq!(client.search_term, "PIZZERIA ROMA");
        assert!(!client.is_blocked);
        assert_eq!(client.tax_number, "");
        assert_eq!(client.billing_address.name, "Pizzeria Roma GmbH");
        assert_eq!(client.billing_address.city, "Köln");
        assert_eq!(client.delivery_address.name, "Roma Lager");
        assert_eq!(client.delivery_address.city, "");
        assert_eq!(client.delivery_schedule.monday, "Ja");
        assert_eq!(client.delivery_schedule.tuesday, "");
        assert!(client.settings.webshop_enabled);
        assert!(!client.settings.no_pickup_app);
        assert_eq!(client.settings.minimum_order_value, Some(150.5));
    }

    #[test]
    fn test_parse_additional_addresses_in_order() {
        let client = parse(CLIENT_XML).unwrap();
        let names: Vec<_> = client
            .additional_addresses
            .iter()
            .map(|a| a.address.name.as_str())
            .collect();
        assert_eq!(names, vec!["Filiale Nord", "Filiale Süd"]);

        let first = &client.additional_addresses[0];
        assert!(first.is_default_billing && first.is_default_delivery);
        let second = &client.additional_addresses[1];
        assert!(!second.is_default_billing && !second.is_default_delivery);
    }

    #[test]
    fn test_parse_client_without_address_list() {
        let client = parse("<E><Adresse><AdrNr>7</AdrNr></Adresse></E>").unwrap();
        assert!(client.additional_addresses.is_empty());
        assert_eq!(client.settings.minimum_order_value, None);
    }

    #[test]
    fn test_parse_client_missing_key() {
        assert!(parse("<E><Adresse><SuchBeg>X</SuchBeg></Adresse></E>").is_none());
        assert!(parse("<E><Adresse><AdrNr><![CDATA[  ]]></AdrNr></Adresse></E>").is_none());
        assert!(parse("<E><Artikel><AdrNr>1</AdrNr></Artikel></E>").is_none());
    }

    #[test]
    fn test_load_clients_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("1001.XML"), CLIENT_XML).unwrap();
        std::fs::write(dir.path().join("broken.XML"), "<Export><Adresse>").unwrap();
        std::fs::write(dir.path().join("nokey.XML"), "<E><Adresse/></E>").unwrap();
        std::fs::write(dir.path().join("lower.xml"), CLIENT_XML.replace("1001", "2002")).unwrap();

        let clients = load_clients(dir.path());
        assert_eq!(clients.len(), 1);
        assert!(clients.contains_key("1001"));
    }
}
