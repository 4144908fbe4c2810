/*!
Bill of quantities.

The BOQ is the verified procurement list of the reference site. It is a fixed list and does not
depend on zones, recommendations or network segments; quantities are maintained by hand.
*/
use std::io;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::zone::{Zone, ZoneId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoqItem {
    pub category: String,
    pub specification: String,
    pub quantity: u32,
    pub unit: String,
    pub zone_id: Option<ZoneId>,
}

// (category, specification, quantity, unit)
const REFERENCE_ITEMS: [(&str, &str, u32, &str); 26] = [
    // Hard network, U-PVC/PE 6 bar
    ("Hard Network", "Pipe 3\" (90mm) - Main Line", 2, "pcs/pipes"),
    ("Hard Network", "Pipe 2\" (63mm) - Carrier Lines", 100, "pcs/pipes"),
    ("Fittings", "Elbow 90° 2\"", 30, "pcs"),
    ("Fittings", "Tee 2\"", 20, "pcs"),
    ("Fittings", "End Cap 2\"", 15, "pcs"),
    ("Fittings", "Socket 2\"", 30, "pcs"),
    ("Fittings", "Union 2\"", 6, "pcs"),
    ("Fittings", "Reducer 3\" to 2\"", 5, "pcs"),
    ("Fittings", "Clamp Saddle 2\"x3/4\"", 20, "pcs"),
    ("Fittings", "Swing Joint or Nipple", 20, "pcs"),
    ("Consumables", "Hot Glue High Pressure (US)", 4, "cans (500g)"),
    ("Consumables", "Cleaner", 2, "cans"),
    ("Consumables", "Teflon Tape", 10, "rolls"),
    // Flexible network, LDPE
    ("Flexible Network", "Hose 16mm Blind (400m)", 6, "rolls"),
    ("Flexible Network", "Spaghetti Tube 6mm", 3, "rolls"),
    ("Flexible Network", "Start Connector 16mm", 450, "pcs"),
    ("Flexible Network", "End Plug 16mm", 5, "bags (100)"),
    ("Emitters", "Bubbler (Palm)", 150, "pcs"),
    ("Emitters", "Drippers PC (Tree)", 1500, "pcs"),
    ("Emitters", "Pop-up Rotary (Lawn)", 20, "pcs"),
    ("Control", "Electric Valve 2\"", 5, "pcs"),
    ("Control", "Valve Box", 5, "pcs"),
    ("Control", "Controller (Timer) 6 Stations", 1, "device"),
    ("Control", "Control Wire 1.5mm", 1, "roll"),
    ("Control", "Disc Filter 3\"", 1, "pcs"),
    ("Control", "Submersible Pump 5HP", 1, "pcs"),
];

/// The site's fixed procurement list. Not derived from zone data.
pub fn reference_procurement_list() -> Vec<BoqItem> {
    REFERENCE_ITEMS
        .iter()
        .map(|&(category, specification, quantity, unit)| BoqItem {
            category: category.to_string(),
            specification: specification.to_string(),
            quantity,
            unit: unit.to_string(),
            zone_id: None,
        })
        .collect()
}

/**
Writes BOQ items as CSV with the columns `Category,Specification,Quantity,Unit,Zone`.

The zone column holds the zone name, `Unknown` for an id missing from `zones`, and `Shared` for
items not tied to a zone.
*/
pub fn write_boq_csv<W: io::Write>(items: &[BoqItem], zones: &[Zone], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["Category", "Specification", "Quantity", "Unit", "Zone"])?;
    for item in items {
        let zone = match item.zone_id {
            Some(id) => zones
                .iter()
                .find(|z| z.id == id)
                .map_or("Unknown", |z| z.name.as_str()),
            None => "Shared",
        };
        let quantity = item.quantity.to_string();
        out.write_record([
            item.category.as_str(),
            item.specification.as_str(),
            quantity.as_str(),
            item.unit.as_str(),
            zone,
        ])?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::PlantCategory;
    use uuid::Uuid;

    #[test]
    fn reference_list_is_complete() {
        let items = reference_procurement_list();
        assert_eq!(items.len(), 26);
        assert!(items.iter().all(|i| i.zone_id.is_none()));
        let drippers = items.iter().find(|i| i.specification.starts_with("Drippers")).unwrap();
        assert_eq!(drippers.quantity, 1500);
    }

    #[test]
    fn csv_has_header_and_zone_column() {
        let palms = Zone::new("North Palms", PlantCategory::Palm, 55);
        let mut items = reference_procurement_list();
        items.truncate(2);
        items[0].zone_id = Some(palms.id);
        items[1].zone_id = Some(Uuid::new_v4());
        items.push(BoqItem {
            category: "Control".to_string(),
            specification: "Valve Box".to_string(),
            quantity: 5,
            unit: "pcs".to_string(),
            zone_id: None,
        });

        let mut out = Vec::new();
        write_boq_csv(&items, &[palms], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Category,Specification,Quantity,Unit,Zone");
        assert!(lines[1].ends_with(",2,pcs/pipes,North Palms"));
        assert!(lines[2].ends_with(",Unknown"));
        assert_eq!(lines[3], "Control,Valve Box,5,pcs,Shared");
    }

    #[test]
    fn specifications_with_quotes_are_escaped() {
        let items = reference_procurement_list();
        let mut out = Vec::new();
        write_boq_csv(&items[..1], &[], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Pipe 3\"\" (90mm) - Main Line\""));
    }
}
