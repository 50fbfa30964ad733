#![cfg(test)]
use domus_common::billing::service::Service;
use domus_common::error::BillingError;
use domus_core::registry::Registry;

/// Walks a full operator session: register, set a tariff, record
/// consumption, then change the tariff and check which numbers move.
#[test]
fn billing_lifecycle() -> anyhow::Result<()> {
    let mut office = Registry::new();

    let id = office.add_resident("Smirnov A.", "Lenina 5");
    assert_eq!(id, 1, "first resident must get id 1");

    office.set_tariff(Service::Electricity, 5.0)?;
    office.add_consumption(id, Service::Electricity, 10.0)?;

    assert_eq!(office.revenue(), 50.0, "revenue accrues at recording time");
    assert_eq!(
        office.total_cost_for_name("Smirnov")?,
        50.0,
        "live total matches the rate at recording time"
    );

    office.set_tariff(Service::Electricity, 7.0)?;

    assert_eq!(
        office.total_cost_for_name("Smirnov")?,
        70.0,
        "live total follows the new rate"
    );
    assert_eq!(office.revenue(), 50.0, "accrued revenue must not move");

    let report = office.resident_report(id)?;
    assert_eq!(report.lines.len(), 1);
    assert_eq!(report.lines[0].cost, 70.0);
    assert_eq!(report.total, 70.0);
    Ok(())
}

#[test]
fn ids_are_unique_and_strictly_increasing() {
    let mut office = Registry::new();

    let ids: Vec<u32> = (0..5)
        .map(|i| office.add_resident(&format!("Resident {i}"), "Sadovaya 1"))
        .collect();

    assert_eq!(ids, [1, 2, 3, 4, 5]);
}

#[test]
fn consumption_for_unknown_id_is_rejected_without_side_effects() {
    let mut office = Registry::new();
    let id = office.add_resident("Ivanov I.", "Lenina 5");
    office.set_tariff(Service::Water, 3.0).unwrap();
    office.add_consumption(id, Service::Water, 1.0).unwrap();

    let result = office.add_consumption(999, Service::Water, 4.0);

    assert!(
        matches!(result, Err(BillingError::ResidentNotFound(999))),
        "unexpected result: {result:?}"
    );
    assert_eq!(office.stats().resident_count, 1);
    assert_eq!(office.residents()[0].entries().len(), 1);
    assert_eq!(office.revenue(), 3.0);
}

#[test]
fn name_search_finds_first_of_similar_names() {
    let mut office = Registry::new();
    let first = office.add_resident("Ivanov I.", "Lenina 5");
    let second = office.add_resident("Ivanova O.", "Lenina 7");

    office.set_tariff(Service::Heating, 10.0).unwrap();
    office.add_consumption(first, Service::Heating, 1.0).unwrap();
    office.add_consumption(second, Service::Heating, 2.0).unwrap();

    // Both names contain the fragment; the first-added resident wins.
    assert_eq!(office.total_cost_for_name("Ivanov").unwrap(), 10.0);

    // Case-sensitive: no lowercase normalization happens anywhere.
    assert!(matches!(
        office.total_cost_for_name("ivanov"),
        Err(BillingError::NoNameMatch(_))
    ));
}

#[test]
fn queries_do_not_mutate() {
    let mut office = Registry::new();
    let id = office.add_resident("Petrov P.", "Mira 3");
    office.set_tariff(Service::Gas, 2.5).unwrap();
    office.add_consumption(id, Service::Gas, 4.0).unwrap();

    let stats_before = office.stats();
    let listing_before: Vec<u32> = office.residents().iter().map(|r| r.id()).collect();

    // Run every read-only operation a few times.
    for _ in 0..3 {
        let _ = office.stats();
        let _ = office.resident_report(id).unwrap();
        let _ = office.total_cost_for_name("Petrov").unwrap();
        let _ = office.tariffs();
    }

    let listing_after: Vec<u32> = office.residents().iter().map(|r| r.id()).collect();
    assert_eq!(office.stats(), stats_before);
    assert_eq!(listing_after, listing_before);
}

#[test]
fn empty_office_behavior() {
    let office = Registry::new();

    assert!(matches!(
        office.total_cost_for_name("X"),
        Err(BillingError::NoNameMatch(_))
    ));
    assert!(office.residents().is_empty());

    let stats = office.stats();
    assert_eq!(stats.resident_count, 0);
    assert_eq!(stats.revenue, 0.0);
    assert!(stats.residents.is_empty());

    // A fresh office already knows every service, at rate zero.
    for service in Service::ALL {
        assert_eq!(stats.tariffs.rate(service), Some(0.0));
    }
}
