//! The compatibility rule set.
//!
//! Rules run in a fixed order and are independent: a missing slot or a
//! missing attribute makes a rule not applicable, never an issue. Only
//! attribute-threshold comparisons happen here; there is no geometry.

use super::build::BuildEngine;

const SOCKET: [&str; 2] = ["socket", "soquete"];
const RAM_TYPE: [&str; 3] = ["tipo", "mem_type", "type"];
const BOARD_RAM_TYPE: [&str; 2] = ["mem_type", "ram_type"];
const GPU_LENGTH: [&str; 2] = ["comprimento_mm", "length_mm"];
const CASE_GPU_LIMIT: [&str; 2] = ["gpu_max_mm", "max_gpu_length_mm"];
const COOLER_HEIGHT: [&str; 2] = ["height_mm", "altura_mm"];
const CASE_COOLER_LIMIT: [&str; 2] = ["cooler_clearance_mm", "max_cooler_height_mm"];
const PSU_WATTAGE: [&str; 2] = ["watt", "power_w"];

impl BuildEngine {
    /// Evaluate the rule set against the current selection and return
    /// human-readable issues in rule order.
    pub fn compatibility_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let cpu = self.slot("CPU");
        let motherboard = self.slot("Motherboard");
        let ram = self.slot("RAM");
        let gpu = self.slot("GPU");
        let case = self.slot("Case");
        let psu = self.slot("PSU");
        let cooler = self.slot("Cooler");

        // 1. CPU and motherboard must share a socket (exact string compare).
        if let (Some(cpu), Some(board)) = (cpu, motherboard) {
            if let (Some(cpu_socket), Some(board_socket)) =
                (cpu.attr_str(&SOCKET), board.attr_str(&SOCKET))
            {
                if cpu_socket != board_socket {
                    issues.push(format!(
                        "Socket mismatch: CPU ({}) does not fit motherboard ({})",
                        cpu_socket, board_socket
                    ));
                }
            }
        }

        // 2. A BIOS note travels with the CPU and is advisory either way.
        if let Some(cpu) = cpu {
            if let Some(note) = cpu.attr(&["required_bios", "bios_note"]) {
                issues.push(format!("BIOS advisory: {}", note));
            }
        }

        // 3. RAM generation must match what the board takes (case-insensitive).
        if let (Some(ram), Some(board)) = (ram, motherboard) {
            if let (Some(ram_type), Some(board_type)) = (
                ram.attr_str(&RAM_TYPE),
                board.attr_str(&BOARD_RAM_TYPE),
            ) {
                if !ram_type.eq_ignore_ascii_case(board_type) {
                    issues.push(format!(
                        "RAM type mismatch: {} != {}",
                        ram_type.to_uppercase(),
                        board_type.to_uppercase()
                    ));
                }
            }
        }

        // 4. GPU length against the case limit.
        if let (Some(gpu), Some(case)) = (gpu, case) {
            if let (Some(length), Some(limit)) =
                (gpu.attr(&GPU_LENGTH), case.attr(&CASE_GPU_LIMIT))
            {
                if let (Some(length_mm), Some(limit_mm)) = (length.as_f64(), limit.as_f64()) {
                    if length_mm > limit_mm {
                        issues.push(format!(
                            "GPU too long: {}mm exceeds case limit of {}mm",
                            length, limit
                        ));
                    }
                }
            }
        }

        // 5. Cooler height against the case clearance.
        if let (Some(cooler), Some(case)) = (cooler, case) {
            if let (Some(height), Some(clearance)) =
                (cooler.attr(&COOLER_HEIGHT), case.attr(&CASE_COOLER_LIMIT))
            {
                if let (Some(height_mm), Some(clearance_mm)) =
                    (height.as_f64(), clearance.as_f64())
                {
                    if height_mm > clearance_mm {
                        issues.push(format!(
                            "Cooler too tall: {}mm exceeds case clearance of {}mm",
                            height, clearance
                        ));
                    }
                }
            }
        }

        // 6. PSU wattage against the recommended rating. Matching the
        //    recommendation exactly is enough.
        if let Some(psu) = psu {
            if let Some(wattage) = psu.attr(&PSU_WATTAGE) {
                if let Some(watts) = wattage.as_f64() {
                    let recommended = self.estimated_power().recommended_w;
                    if (watts as i64) < i64::from(recommended) {
                        issues.push(format!(
                            "PSU may be insufficient: {}W is below the recommended {}W",
                            wattage, recommended
                        ));
                    }
                }
            }
        }

        issues
    }
}
