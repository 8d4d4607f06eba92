use super::*;

/// Tests the role table behind each permission.
///
/// Expected: managers hold every permission, drivers hold none, and the other roles
/// hold exactly their operational permissions
#[test]
fn role_table() {
    use Permission::*;

    let all = [
        ManageVehicles,
        DeleteVehicles,
        ManageDrivers,
        ManageTrips,
        LogMaintenance,
        LogFuel,
        LogExpenses,
        ViewCosts,
        ManageUsers,
    ];

    for permission in all {
        assert!(permission.allows(Role::Manager), "{:?}", permission);
        assert!(!permission.allows(Role::Driver), "{:?}", permission);
    }

    let held = |role: Role| -> Vec<Permission> {
        all.into_iter().filter(|p| p.allows(role)).collect()
    };

    assert_eq!(
        held(Role::Dispatcher),
        vec![ManageVehicles, ManageDrivers, ManageTrips, LogMaintenance, LogFuel]
    );
    assert_eq!(held(Role::SafetyOfficer), vec![ManageDrivers]);
    assert_eq!(
        held(Role::FinancialAnalyst),
        vec![LogFuel, LogExpenses, ViewCosts]
    );
}
