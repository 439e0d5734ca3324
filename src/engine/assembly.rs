//! Assembly-step generation.
//!
//! The sequence is a content contract: steps branch only on slot presence
//! (and the storage form factor) and always come out in the same order, so
//! callers can rely on exact line sequencing. Step numbers are fixed per
//! instruction; absent parts leave gaps rather than renumbering.

use super::build::BuildEngine;

impl BuildEngine {
    /// Produce the ordered assembly instructions for the current selection.
    /// When the rule set reports issues, a warning block is prepended.
    pub fn assembly_steps(&self) -> Vec<String> {
        let mut steps = Vec::new();
        steps.push(
            "Tools: #2 Phillips screwdriver, thermal paste, anti-static wrist strap (optional)."
                .to_string(),
        );

        let storage_form = self
            .slot("Storage")
            .and_then(|part| part.attr_str(&["form_factor"]))
            .unwrap_or("")
            .to_lowercase();

        // Outside the case: everything that mounts onto the bare board.
        if self.slot("Motherboard").is_some() {
            steps.push(
                "1) Prepare the motherboard on an anti-static surface (the board box works)."
                    .to_string(),
            );
            if self.slot("CPU").is_some() {
                steps.push(
                    "2) Seat the CPU: align the corner triangle, lift the retention lever, and close it gently."
                        .to_string(),
                );
            }
            if self.slot("Cooler").is_some() {
                steps.push(
                    "3) Mount the cooler/AIO and apply thermal paste unless it comes pre-applied."
                        .to_string(),
                );
            }
            if self.slot("RAM").is_some() {
                steps.push(
                    "4) Insert the RAM modules in the correct slots (check the manual for dual channel)."
                        .to_string(),
                );
            }
            if storage_form == "m.2" {
                steps.push(
                    "5) Mount the M.2 SSD in the motherboard slot and secure its screw."
                        .to_string(),
                );
            }
        } else {
            steps.push("1) Seat the CPU and cooler (if any) before mounting the motherboard.".to_string());
            if self.slot("RAM").is_some() {
                steps.push("2) Insert the RAM modules into the motherboard slots.".to_string());
            }
        }

        // Inside the case.
        if self.slot("PSU").is_some() {
            steps.push(
                "6) Install the PSU in its bay and route the main cables (24-pin/CPU) behind the tray."
                    .to_string(),
            );
        }
        if self.slot("Motherboard").is_some() {
            steps.push(
                "7) Mount the motherboard on the case standoffs and screw it down carefully."
                    .to_string(),
            );
        }
        if matches!(storage_form.as_str(), "2.5" | "3.5" | "sata") {
            steps.push(
                "8) Mount the SATA drive in a bay and connect its data and power cables."
                    .to_string(),
            );
        }
        if self.slot("GPU").is_some() {
            steps.push(
                "9) Seat the GPU in the top PCIe x16 slot and connect PCIe power leads if required."
                    .to_string(),
            );
        }

        steps.push(
            "10) Connect the front-panel cables (power/reset, USB, audio) and tidy the runs."
                .to_string(),
        );
        steps.push("11) Connect peripherals and power on for the first POST.".to_string());

        let issues = self.compatibility_issues();
        if !issues.is_empty() {
            let mut warned = Vec::with_capacity(steps.len() + issues.len() + 1);
            warned.push(
                "Warning: compatibility issues detected, review before powering on:".to_string(),
            );
            warned.extend(issues.into_iter().map(|issue| format!(" - {}", issue)));
            warned.extend(steps);
            return warned;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::types::{AttrValue, Part};

    fn select(build: &mut BuildEngine, part: Part) {
        build.select(Arc::new(part));
    }

    fn text(value: &str) -> AttrValue {
        AttrValue::Text(value.to_string())
    }

    #[test]
    fn test_full_build_step_ordering() {
        let mut build = BuildEngine::new();
        select(
            &mut build,
            Part::new("mb_1", "Motherboard", "B660", 900.0).with_attribute("socket", text("LGA1700")),
        );
        select(
            &mut build,
            Part::new("cpu_1", "CPU", "i5", 800.0).with_attribute("socket", text("LGA1700")),
        );
        select(&mut build, Part::new("ram_1", "RAM", "Vengeance", 250.0));
        select(&mut build, Part::new("psu_1", "PSU", "RM650", 500.0));
        select(&mut build, Part::new("case_1", "Case", "4000D", 350.0));
        select(&mut build, Part::new("gpu_1", "GPU", "RTX 3060", 1800.0));

        let steps = build.assembly_steps();
        let prefixes: Vec<&str> = steps
            .iter()
            .map(|s| s.split(' ').next().unwrap())
            .collect();
        assert_eq!(
            prefixes,
            vec!["Tools:", "1)", "2)", "4)", "6)", "7)", "9)", "10)", "11)"]
        );
        assert!(steps[0].starts_with("Tools:"));
        assert!(steps[1].contains("motherboard"));
        assert!(steps[2].contains("CPU"));
        assert!(steps[3].contains("RAM"));
        assert!(steps[4].contains("PSU"));
        assert!(steps[5].contains("standoffs"));
        assert!(steps[6].contains("GPU"));
    }

    #[test]
    fn test_m2_storage_mounts_on_the_board() {
        let mut build = BuildEngine::new();
        select(&mut build, Part::new("mb_1", "Motherboard", "B660", 900.0));
        select(
            &mut build,
            Part::new("ssd_1", "Storage", "NV2", 450.0).with_attribute("form_factor", text("M.2")),
        );

        let steps = build.assembly_steps();
        assert!(steps.iter().any(|s| s.contains("M.2")));
        assert!(!steps.iter().any(|s| s.contains("SATA")));
    }

    #[test]
    fn test_sata_storage_mounts_in_a_bay() {
        let mut build = BuildEngine::new();
        select(&mut build, Part::new("mb_1", "Motherboard", "B660", 900.0));
        select(
            &mut build,
            Part::new("ssd_1", "SSD", "MX500", 400.0).with_attribute("form_factor", text("2.5")),
        );

        let steps = build.assembly_steps();
        assert!(steps.iter().any(|s| s.contains("SATA")));
        assert!(!steps.iter().any(|s| s.contains("M.2")));
    }

    #[test]
    fn test_storage_without_form_factor_gets_no_mount_step() {
        let mut build = BuildEngine::new();
        select(&mut build, Part::new("mb_1", "Motherboard", "B660", 900.0));
        select(&mut build, Part::new("hdd_1", "HDD", "Barracuda", 300.0));

        let steps = build.assembly_steps();
        assert!(!steps.iter().any(|s| s.contains("SATA") || s.contains("M.2")));
    }

    #[test]
    fn test_no_motherboard_uses_generic_instructions() {
        let mut build = BuildEngine::new();
        select(&mut build, Part::new("cpu_1", "CPU", "i5", 800.0));
        select(&mut build, Part::new("ram_1", "RAM", "Fury", 250.0));

        let steps = build.assembly_steps();
        assert!(steps[1].contains("before mounting the motherboard"));
        assert!(steps[2].contains("RAM"));
        assert!(!steps.iter().any(|s| s.contains("standoffs")));
    }

    #[test]
    fn test_issues_prepend_a_warning_block() {
        let mut build = BuildEngine::new();
        select(
            &mut build,
            Part::new("cpu_1", "CPU", "Ryzen", 750.0).with_attribute("socket", text("AM4")),
        );
        select(
            &mut build,
            Part::new("mb_1", "Motherboard", "B660", 900.0)
                .with_attribute("socket", text("LGA1700")),
        );

        let steps = build.assembly_steps();
        assert!(steps[0].starts_with("Warning:"));
        assert!(steps[1].starts_with(" - Socket mismatch"));
        assert!(steps[2].starts_with("Tools:"));
    }

    #[test]
    fn test_minimal_selection_still_produces_a_guide() {
        let steps = BuildEngine::new().assembly_steps();
        assert!(steps[0].starts_with("Tools:"));
        assert!(steps.last().unwrap().contains("POST"));
    }
}
