//! Gliese-Jahreiss import: Hipparcos CSV → Accurate Coordinates → CNS3 → CSV

use crate::cli::{Cli, ImportGjArgs};
use anyhow::Context;
use starcat::import::csv::{read_stars_csv, write_stars_csv};
use starcat::import::gj::{import_gj_accurate, import_gj_cns3, ACCURATE_EXPECTED, CNS3_EXPECTED};
use starcat::names::{import_iau_names, import_name_csv};
use starcat::{Catalog, CatalogEntry, NameMap, StarRecord};

struct ImportStats {
    hipparcos: usize,
    names: usize,
    accurate: usize,
    cns3: usize,
    with_hip: usize,
    with_names: usize,
    with_distance: usize,
}

pub fn run(args: &ImportGjArgs, cli: &Cli) -> anyhow::Result<()> {
    print_plan(args, cli);

    let mut hipparcos = Vec::new();
    if let Some(path) = &args.hipparcos {
        read_stars_csv(path, &mut hipparcos)
            .with_context(|| format!("Failed to read Hipparcos stars from {:?}", path))?;
        println!("Loaded {} Hipparcos stars", hipparcos.len());
    }

    let mut names = NameMap::new();
    let mut name_count = 0;
    if let Some(path) = &args.names {
        name_count += import_name_csv(path, &mut names);
    }
    if let Some(path) = &args.iau_names {
        name_count += import_iau_names(path, &mut names);
    }
    println!("Loaded {} names for {} identifiers", name_count, names.len());

    let mut accurate = Vec::new();
    let accurate_count = import_gj_accurate(&args.accurate, &hipparcos, &mut accurate);
    println!("Imported {} GJ accurate-coordinate stars", accurate_count);

    let mut stars = Vec::new();
    let cns3_count = import_gj_cns3(&args.cns3, &names, &accurate, &mut stars);
    println!("Imported {} CNS3 stars", cns3_count);
    if cns3_count == 0 {
        anyhow::bail!("No stars imported from {:?}", args.cns3);
    }

    write_stars_csv(&args.output, &stars)
        .with_context(|| format!("Failed to write {:?}", args.output))?;
    println!("Written {} stars to {:?}", stars.len(), args.output);

    let stats = collect_stats(&stars, hipparcos.len(), name_count, accurate_count, cns3_count);
    print_validation(&stats);
    print_summary(&stats);
    Ok(())
}

fn print_plan(args: &ImportGjArgs, cli: &Cli) {
    println!("\n=== Gliese-Jahreiss Nearby Star Import ===");
    println!("CNS3: {:?}", args.cns3);
    println!("Accurate coordinates: {:?}", args.accurate);
    println!("Hipparcos: {}", describe(args.hipparcos.as_ref()));
    println!("Names: {}", describe(args.names.as_ref()));
    println!("IAU names: {}", describe(args.iau_names.as_ref()));
    println!("Output: {:?}", args.output);
    println!("Verbose: {}", cli.verbose);
    println!();
}

fn describe(path: Option<&std::path::PathBuf>) -> String {
    path.map_or_else(|| "(none)".to_string(), |p| format!("{:?}", p))
}

fn collect_stats(
    stars: &[StarRecord],
    hipparcos: usize,
    names: usize,
    accurate: usize,
    cns3: usize,
) -> ImportStats {
    ImportStats {
        hipparcos,
        names,
        accurate,
        cns3,
        with_hip: stars
            .iter()
            .filter(|s| s.identifier(Catalog::Hip).is_some())
            .count(),
        with_names: stars.iter().filter(|s| !s.names.is_empty()).count(),
        with_distance: stars.iter().filter(|s| s.coords.rad.is_some()).count(),
    }
}

fn print_validation(stats: &ImportStats) {
    println!("\n=== Validation ===");
    for (label, got, expected) in [
        ("Accurate coordinates", stats.accurate, ACCURATE_EXPECTED),
        ("CNS3", stats.cns3, CNS3_EXPECTED),
    ] {
        let status = if got == expected { "OK" } else { "MISMATCH" };
        println!(
            "  {:<22} {:>6} (expected {:>6}) {}",
            label, got, expected, status
        );
    }
}

fn print_summary(stats: &ImportStats) {
    println!("\n=== Summary ===");
    println!("Hipparcos stars loaded: {}", stats.hipparcos);
    println!("Names loaded:           {}", stats.names);
    println!("Accurate stars:         {}", stats.accurate);
    println!("CNS3 stars:             {}", stats.cns3);
    println!("  with HIP identifier:  {}", stats.with_hip);
    println!("  with names:           {}", stats.with_names);
    println!("  with distance:        {}", stats.with_distance);
}
