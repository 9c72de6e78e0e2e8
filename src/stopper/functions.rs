// 3rd party crates
use tracing::{debug, info};

// Project imports
use crate::models::compute::{Instance, Operation, Zone};
use crate::operations::functions::wait_operation;
use crate::operations::types::WaitPolicy;
use crate::providers::ComputeApi;
use crate::settings::types::RunConfig;

// Current module imports
use super::errors::StopperError;
use super::types::{Target, ZoneSummary};

/// Server-side filter selecting the zones of `region`.
pub fn zone_filter(region: &str) -> String {
    format!("name = {}-*", region)
}

/// Resolves the zones to operate on.
///
/// An explicit zone is used as is. A region is expanded to all of its zones by
/// walking every page of the zone listing.
pub async fn resolve_zones<A>(
    api: &A,
    project: &str,
    target: &Target,
) -> Result<Vec<String>, StopperError>
where
    A: ComputeApi + ?Sized,
{
    let region: &str = match target {
        Target::Zone(zone) => return Ok(vec![zone.clone()]),
        Target::Region(region) => region,
    };

    let filter: String = zone_filter(region);
    let prefix: String = format!("{}-", region);
    let mut zones: Vec<Zone> = Vec::new();
    let mut page_token: String = String::new();

    loop {
        let page = api
            .list_zones(project, &filter, &page_token)
            .await
            .map_err(|e| StopperError::ListZones {
                region: region.to_string(),
                source: e,
            })?;
        let last: bool = page.is_last();
        zones.extend(page.items);
        if last {
            break;
        }
        page_token = page.next_page_token;
    }

    // The filter is evaluated by the server; keep only names it promised.
    let names: Vec<String> = zones
        .into_iter()
        .map(|zone| zone.name)
        .filter(|name| name.starts_with(&prefix))
        .collect();

    info!(region = %region, "Zones are {:?}", names);
    Ok(names)
}

/// Lists every instance of `zone`, across all pages.
pub async fn list_instances<A>(
    api: &A,
    project: &str,
    zone: &str,
) -> Result<Vec<Instance>, StopperError>
where
    A: ComputeApi + ?Sized,
{
    let mut instances: Vec<Instance> = Vec::new();
    let mut page_token: String = String::new();

    loop {
        let page = api
            .list_instances(project, zone, &page_token)
            .await
            .map_err(|e| StopperError::ListInstances {
                zone: zone.to_string(),
                source: e,
            })?;
        debug!(
            zone = %zone,
            count = page.items.len(),
            "Received page of instances"
        );
        let last: bool = page.is_last();
        instances.extend(page.items);
        if last {
            break;
        }
        page_token = page.next_page_token;
    }

    Ok(instances)
}

/// Stops one instance and blocks until its stop operation is done.
pub async fn stop_instance<A>(
    api: &A,
    project: &str,
    zone: &str,
    name: &str,
    policy: &WaitPolicy,
) -> Result<u64, StopperError>
where
    A: ComputeApi + ?Sized,
{
    info!(zone = %zone, instance = %name, "Stopping instance");

    let operation: Operation = api
        .stop_instance(project, zone, name)
        .await
        .map_err(|e| StopperError::Stop {
            zone: zone.to_string(),
            instance: name.to_string(),
            source: e,
        })?;

    let target_id: u64 = wait_operation(api, project, operation, policy)
        .await
        .map_err(|e| StopperError::Wait {
            zone: zone.to_string(),
            instance: name.to_string(),
            source: e,
        })?;

    info!(
        zone = %zone,
        instance = %name,
        target_id = target_id,
        "Instance stopped"
    );
    Ok(target_id)
}

/// Stops `instances` one after the other. The first failure aborts the
/// remaining instances.
pub async fn stop_instances<A>(
    api: &A,
    project: &str,
    zone: &str,
    instances: &[Instance],
    policy: &WaitPolicy,
) -> Result<usize, StopperError>
where
    A: ComputeApi + ?Sized,
{
    for instance in instances {
        let owning_zone: &str = instance.zone_name().unwrap_or(zone);
        stop_instance(api, project, owning_zone, &instance.name, policy).await?;
    }
    Ok(instances.len())
}

/// Resolves the target zones, then lists and stops every instance in them.
pub async fn stop_all<A>(api: &A, config: &RunConfig) -> Result<Vec<ZoneSummary>, StopperError>
where
    A: ComputeApi + ?Sized,
{
    let zones: Vec<String> = resolve_zones(api, &config.project, &config.target).await?;
    let mut summaries: Vec<ZoneSummary> = Vec::with_capacity(zones.len());

    for zone in zones {
        let instances: Vec<Instance> = list_instances(api, &config.project, &zone).await?;
        let names: Vec<String> = instances
            .iter()
            .map(|i| format!("{} ({})", i.name, i.status))
            .collect();
        info!(zone = %zone, count = instances.len(), "Instances are {:?}", names);

        let stopped: usize =
            stop_instances(api, &config.project, &zone, &instances, &config.wait).await?;
        summaries.push(ZoneSummary { zone, stopped });
    }

    Ok(summaries)
}
