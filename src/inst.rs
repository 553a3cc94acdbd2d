//! ISA (instruction set architecture) implementation for the [Sharp LR35902](https://en.wikipedia.org/wiki/Game_Boy) CPU.
//!
//! Handlers never carry a cycle count: memory accesses tick the
//! machine through the CPU accessors and instructions with internal
//! machine cycles call [`Cpu::tick_internal`] explicitly, so that the
//! canonical per-opcode T-cycle totals emerge from counting ticks.

use crate::{cpu::Cpu, warnln};

pub type InstructionImpl = (fn(&mut Cpu), &'static str);

pub static INSTRUCTIONS: [InstructionImpl; 256] = [
    // 0x0 opcodes
    (nop, "NOP"),
    (ld_bc_u16, "LD BC, u16"),
    (ld_mbc_a, "LD [BC], A"),
    (inc_bc, "INC BC"),
    (inc_b, "INC B"),
    (dec_b, "DEC B"),
    (ld_b_u8, "LD B, u8"),
    (rlca, "RLCA"),
    (ld_mu16_sp, "LD [u16], SP"),
    (add_hl_bc, "ADD HL, BC"),
    (ld_a_mbc, "LD A, [BC]"),
    (dec_bc, "DEC BC"),
    (inc_c, "INC C"),
    (dec_c, "DEC C"),
    (ld_c_u8, "LD C, u8"),
    (rrca, "RRCA"),
    // 0x1 opcodes
    (stop, "STOP"),
    (ld_de_u16, "LD DE, u16"),
    (ld_mde_a, "LD [DE], A"),
    (inc_de, "INC DE"),
    (inc_d, "INC D"),
    (dec_d, "DEC D"),
    (ld_d_u8, "LD D, u8"),
    (rla, "RLA"),
    (jr_i8, "JR i8"),
    (add_hl_de, "ADD HL, DE"),
    (ld_a_mde, "LD A, [DE]"),
    (dec_de, "DEC DE"),
    (inc_e, "INC E"),
    (dec_e, "DEC E"),
    (ld_e_u8, "LD E, u8"),
    (rra, "RRA"),
    // 0x2 opcodes
    (jr_nz_i8, "JR NZ, i8"),
    (ld_hl_u16, "LD HL, u16"),
    (ld_mhli_a, "LD [HL+], A"),
    (inc_hl, "INC HL"),
    (inc_h, "INC H"),
    (dec_h, "DEC H"),
    (ld_h_u8, "LD H, u8"),
    (daa, "DAA"),
    (jr_z_i8, "JR Z, i8"),
    (add_hl_hl, "ADD HL, HL"),
    (ld_a_mhli, "LD A, [HL+]"),
    (dec_hl, "DEC HL"),
    (inc_l, "INC L"),
    (dec_l, "DEC L"),
    (ld_l_u8, "LD L, u8"),
    (cpl, "CPL"),
    // 0x3 opcodes
    (jr_nc_i8, "JR NC, i8"),
    (ld_sp_u16, "LD SP, u16"),
    (ld_mhld_a, "LD [HL-], A"),
    (inc_sp, "INC SP"),
    (inc_mhl, "INC [HL]"),
    (dec_mhl, "DEC [HL]"),
    (ld_mhl_u8, "LD [HL], u8"),
    (scf, "SCF"),
    (jr_c_i8, "JR C, i8"),
    (add_hl_sp, "ADD HL, SP"),
    (ld_a_mhld, "LD A, [HL-]"),
    (dec_sp, "DEC SP"),
    (inc_a, "INC A"),
    (dec_a, "DEC A"),
    (ld_a_u8, "LD A, u8"),
    (ccf, "CCF"),
    // 0x4 opcodes
    (ld_b_b, "LD B, B"),
    (ld_b_c, "LD B, C"),
    (ld_b_d, "LD B, D"),
    (ld_b_e, "LD B, E"),
    (ld_b_h, "LD B, H"),
    (ld_b_l, "LD B, L"),
    (ld_b_mhl, "LD B, [HL]"),
    (ld_b_a, "LD B, A"),
    (ld_c_b, "LD C, B"),
    (ld_c_c, "LD C, C"),
    (ld_c_d, "LD C, D"),
    (ld_c_e, "LD C, E"),
    (ld_c_h, "LD C, H"),
    (ld_c_l, "LD C, L"),
    (ld_c_mhl, "LD C, [HL]"),
    (ld_c_a, "LD C, A"),
    // 0x5 opcodes
    (ld_d_b, "LD D, B"),
    (ld_d_c, "LD D, C"),
    (ld_d_d, "LD D, D"),
    (ld_d_e, "LD D, E"),
    (ld_d_h, "LD D, H"),
    (ld_d_l, "LD D, L"),
    (ld_d_mhl, "LD D, [HL]"),
    (ld_d_a, "LD D, A"),
    (ld_e_b, "LD E, B"),
    (ld_e_c, "LD E, C"),
    (ld_e_d, "LD E, D"),
    (ld_e_e, "LD E, E"),
    (ld_e_h, "LD E, H"),
    (ld_e_l, "LD E, L"),
    (ld_e_mhl, "LD E, [HL]"),
    (ld_e_a, "LD E, A"),
    // 0x6 opcodes
    (ld_h_b, "LD H, B"),
    (ld_h_c, "LD H, C"),
    (ld_h_d, "LD H, D"),
    (ld_h_e, "LD H, E"),
    (ld_h_h, "LD H, H"),
    (ld_h_l, "LD H, L"),
    (ld_h_mhl, "LD H, [HL]"),
    (ld_h_a, "LD H, A"),
    (ld_l_b, "LD L, B"),
    (ld_l_c, "LD L, C"),
    (ld_l_d, "LD L, D"),
    (ld_l_e, "LD L, E"),
    (ld_l_h, "LD L, H"),
    (ld_l_l, "LD L, L"),
    (ld_l_mhl, "LD L, [HL]"),
    (ld_l_a, "LD L, A"),
    // 0x7 opcodes
    (ld_mhl_b, "LD [HL], B"),
    (ld_mhl_c, "LD [HL], C"),
    (ld_mhl_d, "LD [HL], D"),
    (ld_mhl_e, "LD [HL], E"),
    (ld_mhl_h, "LD [HL], H"),
    (ld_mhl_l, "LD [HL], L"),
    (halt, "HALT"),
    (ld_mhl_a, "LD [HL], A"),
    (ld_a_b, "LD A, B"),
    (ld_a_c, "LD A, C"),
    (ld_a_d, "LD A, D"),
    (ld_a_e, "LD A, E"),
    (ld_a_h, "LD A, H"),
    (ld_a_l, "LD A, L"),
    (ld_a_mhl, "LD A, [HL]"),
    (ld_a_a, "LD A, A"),
    // 0x8 opcodes
    (add_a_b, "ADD A, B"),
    (add_a_c, "ADD A, C"),
    (add_a_d, "ADD A, D"),
    (add_a_e, "ADD A, E"),
    (add_a_h, "ADD A, H"),
    (add_a_l, "ADD A, L"),
    (add_a_mhl, "ADD A, [HL]"),
    (add_a_a, "ADD A, A"),
    (adc_a_b, "ADC A, B"),
    (adc_a_c, "ADC A, C"),
    (adc_a_d, "ADC A, D"),
    (adc_a_e, "ADC A, E"),
    (adc_a_h, "ADC A, H"),
    (adc_a_l, "ADC A, L"),
    (adc_a_mhl, "ADC A, [HL]"),
    (adc_a_a, "ADC A, A"),
    // 0x9 opcodes
    (sub_a_b, "SUB A, B"),
    (sub_a_c, "SUB A, C"),
    (sub_a_d, "SUB A, D"),
    (sub_a_e, "SUB A, E"),
    (sub_a_h, "SUB A, H"),
    (sub_a_l, "SUB A, L"),
    (sub_a_mhl, "SUB A, [HL]"),
    (sub_a_a, "SUB A, A"),
    (sbc_a_b, "SBC A, B"),
    (sbc_a_c, "SBC A, C"),
    (sbc_a_d, "SBC A, D"),
    (sbc_a_e, "SBC A, E"),
    (sbc_a_h, "SBC A, H"),
    (sbc_a_l, "SBC A, L"),
    (sbc_a_mhl, "SBC A, [HL]"),
    (sbc_a_a, "SBC A, A"),
    // 0xA opcodes
    (and_a_b, "AND A, B"),
    (and_a_c, "AND A, C"),
    (and_a_d, "AND A, D"),
    (and_a_e, "AND A, E"),
    (and_a_h, "AND A, H"),
    (and_a_l, "AND A, L"),
    (and_a_mhl, "AND A, [HL]"),
    (and_a_a, "AND A, A"),
    (xor_a_b, "XOR A, B"),
    (xor_a_c, "XOR A, C"),
    (xor_a_d, "XOR A, D"),
    (xor_a_e, "XOR A, E"),
    (xor_a_h, "XOR A, H"),
    (xor_a_l, "XOR A, L"),
    (xor_a_mhl, "XOR A, [HL]"),
    (xor_a_a, "XOR A, A"),
    // 0xB opcodes
    (or_a_b, "OR A, B"),
    (or_a_c, "OR A, C"),
    (or_a_d, "OR A, D"),
    (or_a_e, "OR A, E"),
    (or_a_h, "OR A, H"),
    (or_a_l, "OR A, L"),
    (or_a_mhl, "OR A, [HL]"),
    (or_a_a, "OR A, A"),
    (cp_a_b, "CP A, B"),
    (cp_a_c, "CP A, C"),
    (cp_a_d, "CP A, D"),
    (cp_a_e, "CP A, E"),
    (cp_a_h, "CP A, H"),
    (cp_a_l, "CP A, L"),
    (cp_a_mhl, "CP A, [HL]"),
    (cp_a_a, "CP A, A"),
    // 0xC opcodes
    (ret_nz, "RET NZ"),
    (pop_bc, "POP BC"),
    (jp_nz_u16, "JP NZ, u16"),
    (jp_u16, "JP u16"),
    (call_nz_u16, "CALL NZ, u16"),
    (push_bc, "PUSH BC"),
    (add_a_u8, "ADD A, u8"),
    (rst_00h, "RST 00h"),
    (ret_z, "RET Z"),
    (ret, "RET"),
    (jp_z_u16, "JP Z, u16"),
    (illegal, "ILLEGAL"),
    (call_z_u16, "CALL Z, u16"),
    (call_u16, "CALL u16"),
    (adc_a_u8, "ADC A, u8"),
    (rst_08h, "RST 08h"),
    // 0xD opcodes
    (ret_nc, "RET NC"),
    (pop_de, "POP DE"),
    (jp_nc_u16, "JP NC, u16"),
    (illegal, "ILLEGAL"),
    (call_nc_u16, "CALL NC, u16"),
    (push_de, "PUSH DE"),
    (sub_a_u8, "SUB A, u8"),
    (rst_10h, "RST 10h"),
    (ret_c, "RET C"),
    (reti, "RETI"),
    (jp_c_u16, "JP C, u16"),
    (illegal, "ILLEGAL"),
    (call_c_u16, "CALL C, u16"),
    (illegal, "ILLEGAL"),
    (sbc_a_u8, "SBC A, u8"),
    (rst_18h, "RST 18h"),
    // 0xE opcodes
    (ld_mff00u8_a, "LD [FF00+u8], A"),
    (pop_hl, "POP HL"),
    (ld_mff00c_a, "LD [FF00+C], A"),
    (illegal, "ILLEGAL"),
    (illegal, "ILLEGAL"),
    (push_hl, "PUSH HL"),
    (and_a_u8, "AND A, u8"),
    (rst_20h, "RST 20h"),
    (add_sp_i8, "ADD SP, i8"),
    (jp_hl, "JP HL"),
    (ld_mu16_a, "LD [u16], A"),
    (illegal, "ILLEGAL"),
    (illegal, "ILLEGAL"),
    (illegal, "ILLEGAL"),
    (xor_a_u8, "XOR A, u8"),
    (rst_28h, "RST 28h"),
    // 0xF opcodes
    (ld_a_mff00u8, "LD A, [FF00+u8]"),
    (pop_af, "POP AF"),
    (ld_a_mff00c, "LD A, [FF00+C]"),
    (di, "DI"),
    (illegal, "ILLEGAL"),
    (push_af, "PUSH AF"),
    (or_a_u8, "OR A, u8"),
    (rst_30h, "RST 30h"),
    (ld_hl_spi8, "LD HL, SP+i8"),
    (ld_sp_hl, "LD SP, HL"),
    (ld_a_mu16, "LD A, [u16]"),
    (ei, "EI"),
    (illegal, "ILLEGAL"),
    (illegal, "ILLEGAL"),
    (cp_a_u8, "CP A, u8"),
    (rst_38h, "RST 38h"),
];

pub static EXTENDED: [InstructionImpl; 256] = [
    // 0x0 opcodes
    (rlc_b, "RLC B"),
    (rlc_c, "RLC C"),
    (rlc_d, "RLC D"),
    (rlc_e, "RLC E"),
    (rlc_h, "RLC H"),
    (rlc_l, "RLC L"),
    (rlc_mhl, "RLC [HL]"),
    (rlc_a, "RLC A"),
    (rrc_b, "RRC B"),
    (rrc_c, "RRC C"),
    (rrc_d, "RRC D"),
    (rrc_e, "RRC E"),
    (rrc_h, "RRC H"),
    (rrc_l, "RRC L"),
    (rrc_mhl, "RRC [HL]"),
    (rrc_a, "RRC A"),
    // 0x1 opcodes
    (rl_b, "RL B"),
    (rl_c, "RL C"),
    (rl_d, "RL D"),
    (rl_e, "RL E"),
    (rl_h, "RL H"),
    (rl_l, "RL L"),
    (rl_mhl, "RL [HL]"),
    (rl_a, "RL A"),
    (rr_b, "RR B"),
    (rr_c, "RR C"),
    (rr_d, "RR D"),
    (rr_e, "RR E"),
    (rr_h, "RR H"),
    (rr_l, "RR L"),
    (rr_mhl, "RR [HL]"),
    (rr_a, "RR A"),
    // 0x2 opcodes
    (sla_b, "SLA B"),
    (sla_c, "SLA C"),
    (sla_d, "SLA D"),
    (sla_e, "SLA E"),
    (sla_h, "SLA H"),
    (sla_l, "SLA L"),
    (sla_mhl, "SLA [HL]"),
    (sla_a, "SLA A"),
    (sra_b, "SRA B"),
    (sra_c, "SRA C"),
    (sra_d, "SRA D"),
    (sra_e, "SRA E"),
    (sra_h, "SRA H"),
    (sra_l, "SRA L"),
    (sra_mhl, "SRA [HL]"),
    (sra_a, "SRA A"),
    // 0x3 opcodes
    (swap_b, "SWAP B"),
    (swap_c, "SWAP C"),
    (swap_d, "SWAP D"),
    (swap_e, "SWAP E"),
    (swap_h, "SWAP H"),
    (swap_l, "SWAP L"),
    (swap_mhl, "SWAP [HL]"),
    (swap_a, "SWAP A"),
    (srl_b, "SRL B"),
    (srl_c, "SRL C"),
    (srl_d, "SRL D"),
    (srl_e, "SRL E"),
    (srl_h, "SRL H"),
    (srl_l, "SRL L"),
    (srl_mhl, "SRL [HL]"),
    (srl_a, "SRL A"),
    // 0x4 opcodes
    (bit_0_b, "BIT 0, B"),
    (bit_0_c, "BIT 0, C"),
    (bit_0_d, "BIT 0, D"),
    (bit_0_e, "BIT 0, E"),
    (bit_0_h, "BIT 0, H"),
    (bit_0_l, "BIT 0, L"),
    (bit_0_mhl, "BIT 0, [HL]"),
    (bit_0_a, "BIT 0, A"),
    (bit_1_b, "BIT 1, B"),
    (bit_1_c, "BIT 1, C"),
    (bit_1_d, "BIT 1, D"),
    (bit_1_e, "BIT 1, E"),
    (bit_1_h, "BIT 1, H"),
    (bit_1_l, "BIT 1, L"),
    (bit_1_mhl, "BIT 1, [HL]"),
    (bit_1_a, "BIT 1, A"),
    // 0x5 opcodes
    (bit_2_b, "BIT 2, B"),
    (bit_2_c, "BIT 2, C"),
    (bit_2_d, "BIT 2, D"),
    (bit_2_e, "BIT 2, E"),
    (bit_2_h, "BIT 2, H"),
    (bit_2_l, "BIT 2, L"),
    (bit_2_mhl, "BIT 2, [HL]"),
    (bit_2_a, "BIT 2, A"),
    (bit_3_b, "BIT 3, B"),
    (bit_3_c, "BIT 3, C"),
    (bit_3_d, "BIT 3, D"),
    (bit_3_e, "BIT 3, E"),
    (bit_3_h, "BIT 3, H"),
    (bit_3_l, "BIT 3, L"),
    (bit_3_mhl, "BIT 3, [HL]"),
    (bit_3_a, "BIT 3, A"),
    // 0x6 opcodes
    (bit_4_b, "BIT 4, B"),
    (bit_4_c, "BIT 4, C"),
    (bit_4_d, "BIT 4, D"),
    (bit_4_e, "BIT 4, E"),
    (bit_4_h, "BIT 4, H"),
    (bit_4_l, "BIT 4, L"),
    (bit_4_mhl, "BIT 4, [HL]"),
    (bit_4_a, "BIT 4, A"),
    (bit_5_b, "BIT 5, B"),
    (bit_5_c, "BIT 5, C"),
    (bit_5_d, "BIT 5, D"),
    (bit_5_e, "BIT 5, E"),
    (bit_5_h, "BIT 5, H"),
    (bit_5_l, "BIT 5, L"),
    (bit_5_mhl, "BIT 5, [HL]"),
    (bit_5_a, "BIT 5, A"),
    // 0x7 opcodes
    (bit_6_b, "BIT 6, B"),
    (bit_6_c, "BIT 6, C"),
    (bit_6_d, "BIT 6, D"),
    (bit_6_e, "BIT 6, E"),
    (bit_6_h, "BIT 6, H"),
    (bit_6_l, "BIT 6, L"),
    (bit_6_mhl, "BIT 6, [HL]"),
    (bit_6_a, "BIT 6, A"),
    (bit_7_b, "BIT 7, B"),
    (bit_7_c, "BIT 7, C"),
    (bit_7_d, "BIT 7, D"),
    (bit_7_e, "BIT 7, E"),
    (bit_7_h, "BIT 7, H"),
    (bit_7_l, "BIT 7, L"),
    (bit_7_mhl, "BIT 7, [HL]"),
    (bit_7_a, "BIT 7, A"),
    // 0x8 opcodes
    (res_0_b, "RES 0, B"),
    (res_0_c, "RES 0, C"),
    (res_0_d, "RES 0, D"),
    (res_0_e, "RES 0, E"),
    (res_0_h, "RES 0, H"),
    (res_0_l, "RES 0, L"),
    (res_0_mhl, "RES 0, [HL]"),
    (res_0_a, "RES 0, A"),
    (res_1_b, "RES 1, B"),
    (res_1_c, "RES 1, C"),
    (res_1_d, "RES 1, D"),
    (res_1_e, "RES 1, E"),
    (res_1_h, "RES 1, H"),
    (res_1_l, "RES 1, L"),
    (res_1_mhl, "RES 1, [HL]"),
    (res_1_a, "RES 1, A"),
    // 0x9 opcodes
    (res_2_b, "RES 2, B"),
    (res_2_c, "RES 2, C"),
    (res_2_d, "RES 2, D"),
    (res_2_e, "RES 2, E"),
    (res_2_h, "RES 2, H"),
    (res_2_l, "RES 2, L"),
    (res_2_mhl, "RES 2, [HL]"),
    (res_2_a, "RES 2, A"),
    (res_3_b, "RES 3, B"),
    (res_3_c, "RES 3, C"),
    (res_3_d, "RES 3, D"),
    (res_3_e, "RES 3, E"),
    (res_3_h, "RES 3, H"),
    (res_3_l, "RES 3, L"),
    (res_3_mhl, "RES 3, [HL]"),
    (res_3_a, "RES 3, A"),
    // 0xA opcodes
    (res_4_b, "RES 4, B"),
    (res_4_c, "RES 4, C"),
    (res_4_d, "RES 4, D"),
    (res_4_e, "RES 4, E"),
    (res_4_h, "RES 4, H"),
    (res_4_l, "RES 4, L"),
    (res_4_mhl, "RES 4, [HL]"),
    (res_4_a, "RES 4, A"),
    (res_5_b, "RES 5, B"),
    (res_5_c, "RES 5, C"),
    (res_5_d, "RES 5, D"),
    (res_5_e, "RES 5, E"),
    (res_5_h, "RES 5, H"),
    (res_5_l, "RES 5, L"),
    (res_5_mhl, "RES 5, [HL]"),
    (res_5_a, "RES 5, A"),
    // 0xB opcodes
    (res_6_b, "RES 6, B"),
    (res_6_c, "RES 6, C"),
    (res_6_d, "RES 6, D"),
    (res_6_e, "RES 6, E"),
    (res_6_h, "RES 6, H"),
    (res_6_l, "RES 6, L"),
    (res_6_mhl, "RES 6, [HL]"),
    (res_6_a, "RES 6, A"),
    (res_7_b, "RES 7, B"),
    (res_7_c, "RES 7, C"),
    (res_7_d, "RES 7, D"),
    (res_7_e, "RES 7, E"),
    (res_7_h, "RES 7, H"),
    (res_7_l, "RES 7, L"),
    (res_7_mhl, "RES 7, [HL]"),
    (res_7_a, "RES 7, A"),
    // 0xC opcodes
    (set_0_b, "SET 0, B"),
    (set_0_c, "SET 0, C"),
    (set_0_d, "SET 0, D"),
    (set_0_e, "SET 0, E"),
    (set_0_h, "SET 0, H"),
    (set_0_l, "SET 0, L"),
    (set_0_mhl, "SET 0, [HL]"),
    (set_0_a, "SET 0, A"),
    (set_1_b, "SET 1, B"),
    (set_1_c, "SET 1, C"),
    (set_1_d, "SET 1, D"),
    (set_1_e, "SET 1, E"),
    (set_1_h, "SET 1, H"),
    (set_1_l, "SET 1, L"),
    (set_1_mhl, "SET 1, [HL]"),
    (set_1_a, "SET 1, A"),
    // 0xD opcodes
    (set_2_b, "SET 2, B"),
    (set_2_c, "SET 2, C"),
    (set_2_d, "SET 2, D"),
    (set_2_e, "SET 2, E"),
    (set_2_h, "SET 2, H"),
    (set_2_l, "SET 2, L"),
    (set_2_mhl, "SET 2, [HL]"),
    (set_2_a, "SET 2, A"),
    (set_3_b, "SET 3, B"),
    (set_3_c, "SET 3, C"),
    (set_3_d, "SET 3, D"),
    (set_3_e, "SET 3, E"),
    (set_3_h, "SET 3, H"),
    (set_3_l, "SET 3, L"),
    (set_3_mhl, "SET 3, [HL]"),
    (set_3_a, "SET 3, A"),
    // 0xE opcodes
    (set_4_b, "SET 4, B"),
    (set_4_c, "SET 4, C"),
    (set_4_d, "SET 4, D"),
    (set_4_e, "SET 4, E"),
    (set_4_h, "SET 4, H"),
    (set_4_l, "SET 4, L"),
    (set_4_mhl, "SET 4, [HL]"),
    (set_4_a, "SET 4, A"),
    (set_5_b, "SET 5, B"),
    (set_5_c, "SET 5, C"),
    (set_5_d, "SET 5, D"),
    (set_5_e, "SET 5, E"),
    (set_5_h, "SET 5, H"),
    (set_5_l, "SET 5, L"),
    (set_5_mhl, "SET 5, [HL]"),
    (set_5_a, "SET 5, A"),
    // 0xF opcodes
    (set_6_b, "SET 6, B"),
    (set_6_c, "SET 6, C"),
    (set_6_d, "SET 6, D"),
    (set_6_e, "SET 6, E"),
    (set_6_h, "SET 6, H"),
    (set_6_l, "SET 6, L"),
    (set_6_mhl, "SET 6, [HL]"),
    (set_6_a, "SET 6, A"),
    (set_7_b, "SET 7, B"),
    (set_7_c, "SET 7, C"),
    (set_7_d, "SET 7, D"),
    (set_7_e, "SET 7, E"),
    (set_7_h, "SET 7, H"),
    (set_7_l, "SET 7, L"),
    (set_7_mhl, "SET 7, [HL]"),
    (set_7_a, "SET 7, A"),
];

fn nop(_cpu: &mut Cpu) {}

fn illegal(cpu: &mut Cpu) {
    warnln!("Illegal instruction, locking CPU");
    cpu.lock_illegal();
}

fn ld_bc_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();
    cpu.set_bc(word);
}

fn ld_mbc_a(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.bc(), cpu.a);
}

fn inc_bc(cpu: &mut Cpu) {
    cpu.set_bc(cpu.bc().wrapping_add(1));
    cpu.tick_internal();
}

fn inc_b(cpu: &mut Cpu) {
    let b = cpu.b;
    let value = b.wrapping_add(1);

    cpu.set_sub(false);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((b & 0xf) == 0xf);

    cpu.b = value;
}

fn dec_b(cpu: &mut Cpu) {
    let b = cpu.b;
    let value = b.wrapping_sub(1);

    cpu.set_sub(true);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((b & 0xf) == 0x0);

    cpu.b = value;
}

fn ld_b_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.b = byte;
}

fn rlca(cpu: &mut Cpu) {
    let carry = cpu.a >> 7;

    cpu.a = cpu.a << 1 | carry;

    cpu.set_sub(false);
    cpu.set_zero(false);
    cpu.set_half_carry(false);
    cpu.set_carry(carry == 1);
}

fn ld_mu16_sp(cpu: &mut Cpu) {
    let word = cpu.read_u16();
    cpu.mmu.write(word, cpu.sp as u8);
    cpu.mmu.write(word.wrapping_add(1), (cpu.sp >> 8) as u8);
}

fn add_hl_bc(cpu: &mut Cpu) {
    let value = add_u16_u16(cpu, cpu.hl(), cpu.bc());
    cpu.set_hl(value);
}

fn ld_a_mbc(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.bc());
    cpu.a = byte;
}

fn dec_bc(cpu: &mut Cpu) {
    cpu.set_bc(cpu.bc().wrapping_sub(1));
    cpu.tick_internal();
}

fn inc_c(cpu: &mut Cpu) {
    let c = cpu.c;
    let value = c.wrapping_add(1);

    cpu.set_sub(false);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((c & 0xf) == 0xf);

    cpu.c = value;
}

fn dec_c(cpu: &mut Cpu) {
    let c = cpu.c;
    let value = c.wrapping_sub(1);

    cpu.set_sub(true);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((c & 0xf) == 0x0);

    cpu.c = value;
}

fn ld_c_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.c = byte;
}

fn rrca(cpu: &mut Cpu) {
    let carry = cpu.a & 0x1;
    cpu.a = (cpu.a >> 1) | (carry << 7);

    cpu.set_sub(false);
    cpu.set_zero(false);
    cpu.set_half_carry(false);
    cpu.set_carry(carry == 0x1);
}

fn stop(cpu: &mut Cpu) {
    // the byte that follows STOP is fetched and discarded,
    // the DMG specific clock halting is not emulated
    cpu.read_u8();
}

fn ld_de_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();
    cpu.set_de(word);
}

fn ld_mde_a(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.de(), cpu.a);
}

fn inc_de(cpu: &mut Cpu) {
    cpu.set_de(cpu.de().wrapping_add(1));
    cpu.tick_internal();
}

fn inc_d(cpu: &mut Cpu) {
    let d = cpu.d;
    let value = d.wrapping_add(1);

    cpu.set_sub(false);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((d & 0xf) == 0xf);

    cpu.d = value;
}

fn dec_d(cpu: &mut Cpu) {
    let d = cpu.d;
    let value = d.wrapping_sub(1);

    cpu.set_sub(true);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((d & 0xf) == 0x0);

    cpu.d = value;
}

fn ld_d_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.d = byte;
}

fn rla(cpu: &mut Cpu) {
    let carry = cpu.carry();

    cpu.set_carry(cpu.a & 0x80 == 0x80);

    cpu.a = cpu.a << 1 | carry as u8;

    cpu.set_sub(false);
    cpu.set_zero(false);
    cpu.set_half_carry(false);
}

fn jr_i8(cpu: &mut Cpu) {
    let byte = cpu.read_u8() as i8;
    cpu.pc = (cpu.pc as i16).wrapping_add(byte as i16) as u16;
    cpu.tick_internal();
}

fn add_hl_de(cpu: &mut Cpu) {
    let value = add_u16_u16(cpu, cpu.hl(), cpu.de());
    cpu.set_hl(value);
}

fn ld_a_mde(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.de());
    cpu.a = byte;
}

fn dec_de(cpu: &mut Cpu) {
    cpu.set_de(cpu.de().wrapping_sub(1));
    cpu.tick_internal();
}

fn inc_e(cpu: &mut Cpu) {
    let e = cpu.e;
    let value = e.wrapping_add(1);

    cpu.set_sub(false);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((e & 0xf) == 0xf);

    cpu.e = value;
}

fn dec_e(cpu: &mut Cpu) {
    let e = cpu.e;
    let value = e.wrapping_sub(1);

    cpu.set_sub(true);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((e & 0xf) == 0x0);

    cpu.e = value;
}

fn ld_e_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.e = byte;
}

fn rra(cpu: &mut Cpu) {
    let carry = cpu.carry();

    cpu.set_carry((cpu.a & 0x1) == 0x1);

    cpu.a = cpu.a >> 1 | ((carry as u8) << 7);

    cpu.set_sub(false);
    cpu.set_zero(false);
    cpu.set_half_carry(false);
}

fn jr_nz_i8(cpu: &mut Cpu) {
    let byte = cpu.read_u8() as i8;

    if cpu.zero() {
        return;
    }

    cpu.pc = (cpu.pc as i16).wrapping_add(byte as i16) as u16;
    cpu.tick_internal();
}

fn ld_hl_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();
    cpu.set_hl(word);
}

fn ld_mhli_a(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.hl(), cpu.a);
    cpu.set_hl(cpu.hl().wrapping_add(1));
}

fn inc_hl(cpu: &mut Cpu) {
    cpu.set_hl(cpu.hl().wrapping_add(1));
    cpu.tick_internal();
}

fn inc_h(cpu: &mut Cpu) {
    let h = cpu.h;
    let value = h.wrapping_add(1);

    cpu.set_sub(false);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((h & 0xf) == 0xf);

    cpu.h = value;
}

fn dec_h(cpu: &mut Cpu) {
    let h = cpu.h;
    let value = h.wrapping_sub(1);

    cpu.set_sub(true);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((h & 0xf) == 0x0);

    cpu.h = value;
}

fn ld_h_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.h = byte;
}

fn daa(cpu: &mut Cpu) {
    let a = cpu.a;
    let mut adjust = 0;

    if cpu.half_carry() {
        adjust |= 0x06;
    }

    if cpu.carry() {
        adjust |= 0x60;
    }

    let result = if cpu.sub() {
        a.wrapping_sub(adjust)
    } else {
        if a & 0x0f > 0x09 {
            adjust |= 0x06;
        }

        if a > 0x99 {
            adjust |= 0x60;
        }

        a.wrapping_add(adjust)
    };

    cpu.a = result;

    cpu.set_zero(result == 0);
    cpu.set_half_carry(false);
    cpu.set_carry(adjust & 0x60 == 0x60);
}

fn jr_z_i8(cpu: &mut Cpu) {
    let byte = cpu.read_u8() as i8;

    if !cpu.zero() {
        return;
    }

    cpu.pc = (cpu.pc as i16).wrapping_add(byte as i16) as u16;
    cpu.tick_internal();
}

fn add_hl_hl(cpu: &mut Cpu) {
    let value = add_u16_u16(cpu, cpu.hl(), cpu.hl());
    cpu.set_hl(value);
}

fn ld_a_mhli(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.a = byte;
    cpu.set_hl(cpu.hl().wrapping_add(1));
}

fn dec_hl(cpu: &mut Cpu) {
    cpu.set_hl(cpu.hl().wrapping_sub(1));
    cpu.tick_internal();
}

fn inc_l(cpu: &mut Cpu) {
    let l = cpu.l;
    let value = l.wrapping_add(1);

    cpu.set_sub(false);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((l & 0xf) == 0xf);

    cpu.l = value;
}

fn dec_l(cpu: &mut Cpu) {
    let l = cpu.l;
    let value = l.wrapping_sub(1);

    cpu.set_sub(true);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((l & 0xf) == 0x0);

    cpu.l = value;
}

fn ld_l_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.l = byte;
}

fn cpl(cpu: &mut Cpu) {
    cpu.a = !cpu.a;

    cpu.set_sub(true);
    cpu.set_half_carry(true);
}

fn jr_nc_i8(cpu: &mut Cpu) {
    let byte = cpu.read_u8() as i8;

    if cpu.carry() {
        return;
    }

    cpu.pc = (cpu.pc as i16).wrapping_add(byte as i16) as u16;
    cpu.tick_internal();
}

fn ld_sp_u16(cpu: &mut Cpu) {
    cpu.sp = cpu.read_u16();
}

fn ld_mhld_a(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.hl(), cpu.a);
    cpu.set_hl(cpu.hl().wrapping_sub(1));
}

fn inc_sp(cpu: &mut Cpu) {
    cpu.sp = cpu.sp.wrapping_add(1);
    cpu.tick_internal();
}

fn inc_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    let value = byte.wrapping_add(1);

    cpu.set_sub(false);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((byte & 0xf) == 0xf);

    cpu.mmu.write(cpu.hl(), value);
}

fn dec_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    let value = byte.wrapping_sub(1);

    cpu.set_sub(true);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((byte & 0xf) == 0x0);

    cpu.mmu.write(cpu.hl(), value);
}

fn ld_mhl_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.mmu.write(cpu.hl(), byte);
}

fn scf(cpu: &mut Cpu) {
    cpu.set_sub(false);
    cpu.set_half_carry(false);
    cpu.set_carry(true);
}

fn jr_c_i8(cpu: &mut Cpu) {
    let byte = cpu.read_u8() as i8;

    if !cpu.carry() {
        return;
    }

    cpu.pc = (cpu.pc as i16).wrapping_add(byte as i16) as u16;
    cpu.tick_internal();
}

fn add_hl_sp(cpu: &mut Cpu) {
    let value = add_u16_u16(cpu, cpu.hl(), cpu.sp());
    cpu.set_hl(value);
}

fn ld_a_mhld(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.a = byte;
    cpu.set_hl(cpu.hl().wrapping_sub(1));
}

fn dec_sp(cpu: &mut Cpu) {
    cpu.sp = cpu.sp.wrapping_sub(1);
    cpu.tick_internal();
}

fn inc_a(cpu: &mut Cpu) {
    let a = cpu.a;
    let value = a.wrapping_add(1);

    cpu.set_sub(false);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((a & 0xf) == 0xf);

    cpu.a = value;
}

fn dec_a(cpu: &mut Cpu) {
    let a = cpu.a;
    let value = a.wrapping_sub(1);

    cpu.set_sub(true);
    cpu.set_zero(value == 0);
    cpu.set_half_carry((a & 0xf) == 0x0);

    cpu.a = value;
}

fn ld_a_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.a = byte;
}

fn ccf(cpu: &mut Cpu) {
    cpu.set_sub(false);
    cpu.set_half_carry(false);
    cpu.set_carry(!cpu.carry());
}

fn ld_b_b(_cpu: &mut Cpu) {}

fn ld_b_c(cpu: &mut Cpu) {
    cpu.b = cpu.c;
}

fn ld_b_d(cpu: &mut Cpu) {
    cpu.b = cpu.d;
}

fn ld_b_e(cpu: &mut Cpu) {
    cpu.b = cpu.e;
}

fn ld_b_h(cpu: &mut Cpu) {
    cpu.b = cpu.h;
}

fn ld_b_l(cpu: &mut Cpu) {
    cpu.b = cpu.l;
}

fn ld_b_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.b = byte;
}

fn ld_b_a(cpu: &mut Cpu) {
    cpu.b = cpu.a;
}

fn ld_c_b(cpu: &mut Cpu) {
    cpu.c = cpu.b;
}

fn ld_c_c(_cpu: &mut Cpu) {}

fn ld_c_d(cpu: &mut Cpu) {
    cpu.c = cpu.d;
}

fn ld_c_e(cpu: &mut Cpu) {
    cpu.c = cpu.e;
}

fn ld_c_h(cpu: &mut Cpu) {
    cpu.c = cpu.h;
}

fn ld_c_l(cpu: &mut Cpu) {
    cpu.c = cpu.l;
}

fn ld_c_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.c = byte;
}

fn ld_c_a(cpu: &mut Cpu) {
    cpu.c = cpu.a;
}

fn ld_d_b(cpu: &mut Cpu) {
    cpu.d = cpu.b;
}

fn ld_d_c(cpu: &mut Cpu) {
    cpu.d = cpu.c;
}

fn ld_d_d(_cpu: &mut Cpu) {}

fn ld_d_e(cpu: &mut Cpu) {
    cpu.d = cpu.e;
}

fn ld_d_h(cpu: &mut Cpu) {
    cpu.d = cpu.h;
}

fn ld_d_l(cpu: &mut Cpu) {
    cpu.d = cpu.l;
}

fn ld_d_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.d = byte;
}

fn ld_d_a(cpu: &mut Cpu) {
    cpu.d = cpu.a;
}

fn ld_e_b(cpu: &mut Cpu) {
    cpu.e = cpu.b;
}

fn ld_e_c(cpu: &mut Cpu) {
    cpu.e = cpu.c;
}

fn ld_e_d(cpu: &mut Cpu) {
    cpu.e = cpu.d;
}

fn ld_e_e(_cpu: &mut Cpu) {}

fn ld_e_h(cpu: &mut Cpu) {
    cpu.e = cpu.h;
}

fn ld_e_l(cpu: &mut Cpu) {
    cpu.e = cpu.l;
}

fn ld_e_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.e = byte;
}

fn ld_e_a(cpu: &mut Cpu) {
    cpu.e = cpu.a;
}

fn ld_h_b(cpu: &mut Cpu) {
    cpu.h = cpu.b;
}

fn ld_h_c(cpu: &mut Cpu) {
    cpu.h = cpu.c;
}

fn ld_h_d(cpu: &mut Cpu) {
    cpu.h = cpu.d;
}

fn ld_h_e(cpu: &mut Cpu) {
    cpu.h = cpu.e;
}

fn ld_h_h(_cpu: &mut Cpu) {}

fn ld_h_l(cpu: &mut Cpu) {
    cpu.h = cpu.l;
}

fn ld_h_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.h = byte;
}

fn ld_h_a(cpu: &mut Cpu) {
    cpu.h = cpu.a;
}

fn ld_l_b(cpu: &mut Cpu) {
    cpu.l = cpu.b;
}

fn ld_l_c(cpu: &mut Cpu) {
    cpu.l = cpu.c;
}

fn ld_l_d(cpu: &mut Cpu) {
    cpu.l = cpu.d;
}

fn ld_l_e(cpu: &mut Cpu) {
    cpu.l = cpu.e;
}

fn ld_l_h(cpu: &mut Cpu) {
    cpu.l = cpu.h;
}

fn ld_l_l(_cpu: &mut Cpu) {}

fn ld_l_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.l = byte;
}

fn ld_l_a(cpu: &mut Cpu) {
    cpu.l = cpu.a;
}

fn ld_mhl_b(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.hl(), cpu.b);
}

fn ld_mhl_c(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.hl(), cpu.c);
}

fn ld_mhl_d(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.hl(), cpu.d);
}

fn ld_mhl_e(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.hl(), cpu.e);
}

fn ld_mhl_h(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.hl(), cpu.h);
}

fn ld_mhl_l(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.hl(), cpu.l);
}

fn halt(cpu: &mut Cpu) {
    // with interrupts disabled and at least one pending the HALT
    // does not halt at all, instead the next opcode fetch fails
    // to advance the PC (the infamous HALT bug)
    if !cpu.ime_any() && cpu.mmu.interrupt_pending() != 0 {
        cpu.set_halt_bug();
    } else {
        cpu.halt();
    }
}

fn ld_mhl_a(cpu: &mut Cpu) {
    cpu.mmu.write(cpu.hl(), cpu.a);
}

fn ld_a_b(cpu: &mut Cpu) {
    cpu.a = cpu.b;
}

fn ld_a_c(cpu: &mut Cpu) {
    cpu.a = cpu.c;
}

fn ld_a_d(cpu: &mut Cpu) {
    cpu.a = cpu.d;
}

fn ld_a_e(cpu: &mut Cpu) {
    cpu.a = cpu.e;
}

fn ld_a_h(cpu: &mut Cpu) {
    cpu.a = cpu.h;
}

fn ld_a_l(cpu: &mut Cpu) {
    cpu.a = cpu.l;
}

fn ld_a_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.a = byte;
}

fn ld_a_a(_cpu: &mut Cpu) {}

fn add_a_b(cpu: &mut Cpu) {
    cpu.a = add_set_flags(cpu, cpu.a, cpu.b);
}

fn add_a_c(cpu: &mut Cpu) {
    cpu.a = add_set_flags(cpu, cpu.a, cpu.c);
}

fn add_a_d(cpu: &mut Cpu) {
    cpu.a = add_set_flags(cpu, cpu.a, cpu.d);
}

fn add_a_e(cpu: &mut Cpu) {
    cpu.a = add_set_flags(cpu, cpu.a, cpu.e);
}

fn add_a_h(cpu: &mut Cpu) {
    cpu.a = add_set_flags(cpu, cpu.a, cpu.h);
}

fn add_a_l(cpu: &mut Cpu) {
    cpu.a = add_set_flags(cpu, cpu.a, cpu.l);
}

fn add_a_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.a = add_set_flags(cpu, cpu.a, byte);
}

fn add_a_a(cpu: &mut Cpu) {
    cpu.a = add_set_flags(cpu, cpu.a, cpu.a);
}

fn adc_a_b(cpu: &mut Cpu) {
    cpu.a = add_carry_set_flags(cpu, cpu.a, cpu.b);
}

fn adc_a_c(cpu: &mut Cpu) {
    cpu.a = add_carry_set_flags(cpu, cpu.a, cpu.c);
}

fn adc_a_d(cpu: &mut Cpu) {
    cpu.a = add_carry_set_flags(cpu, cpu.a, cpu.d);
}

fn adc_a_e(cpu: &mut Cpu) {
    cpu.a = add_carry_set_flags(cpu, cpu.a, cpu.e);
}

fn adc_a_h(cpu: &mut Cpu) {
    cpu.a = add_carry_set_flags(cpu, cpu.a, cpu.h);
}

fn adc_a_l(cpu: &mut Cpu) {
    cpu.a = add_carry_set_flags(cpu, cpu.a, cpu.l);
}

fn adc_a_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.a = add_carry_set_flags(cpu, cpu.a, byte);
}

fn adc_a_a(cpu: &mut Cpu) {
    cpu.a = add_carry_set_flags(cpu, cpu.a, cpu.a);
}

fn sub_a_b(cpu: &mut Cpu) {
    cpu.a = sub_set_flags(cpu, cpu.a, cpu.b);
}

fn sub_a_c(cpu: &mut Cpu) {
    cpu.a = sub_set_flags(cpu, cpu.a, cpu.c);
}

fn sub_a_d(cpu: &mut Cpu) {
    cpu.a = sub_set_flags(cpu, cpu.a, cpu.d);
}

fn sub_a_e(cpu: &mut Cpu) {
    cpu.a = sub_set_flags(cpu, cpu.a, cpu.e);
}

fn sub_a_h(cpu: &mut Cpu) {
    cpu.a = sub_set_flags(cpu, cpu.a, cpu.h);
}

fn sub_a_l(cpu: &mut Cpu) {
    cpu.a = sub_set_flags(cpu, cpu.a, cpu.l);
}

fn sub_a_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.a = sub_set_flags(cpu, cpu.a, byte);
}

fn sub_a_a(cpu: &mut Cpu) {
    cpu.a = sub_set_flags(cpu, cpu.a, cpu.a);
}

fn sbc_a_b(cpu: &mut Cpu) {
    cpu.a = sub_carry_set_flags(cpu, cpu.a, cpu.b);
}

fn sbc_a_c(cpu: &mut Cpu) {
    cpu.a = sub_carry_set_flags(cpu, cpu.a, cpu.c);
}

fn sbc_a_d(cpu: &mut Cpu) {
    cpu.a = sub_carry_set_flags(cpu, cpu.a, cpu.d);
}

fn sbc_a_e(cpu: &mut Cpu) {
    cpu.a = sub_carry_set_flags(cpu, cpu.a, cpu.e);
}

fn sbc_a_h(cpu: &mut Cpu) {
    cpu.a = sub_carry_set_flags(cpu, cpu.a, cpu.h);
}

fn sbc_a_l(cpu: &mut Cpu) {
    cpu.a = sub_carry_set_flags(cpu, cpu.a, cpu.l);
}

fn sbc_a_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.a = sub_carry_set_flags(cpu, cpu.a, byte);
}

fn sbc_a_a(cpu: &mut Cpu) {
    cpu.a = sub_carry_set_flags(cpu, cpu.a, cpu.a);
}

fn and_a_b(cpu: &mut Cpu) {
    cpu.a = and_set_flags(cpu, cpu.a, cpu.b);
}

fn and_a_c(cpu: &mut Cpu) {
    cpu.a = and_set_flags(cpu, cpu.a, cpu.c);
}

fn and_a_d(cpu: &mut Cpu) {
    cpu.a = and_set_flags(cpu, cpu.a, cpu.d);
}

fn and_a_e(cpu: &mut Cpu) {
    cpu.a = and_set_flags(cpu, cpu.a, cpu.e);
}

fn and_a_h(cpu: &mut Cpu) {
    cpu.a = and_set_flags(cpu, cpu.a, cpu.h);
}

fn and_a_l(cpu: &mut Cpu) {
    cpu.a = and_set_flags(cpu, cpu.a, cpu.l);
}

fn and_a_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.a = and_set_flags(cpu, cpu.a, byte);
}

fn and_a_a(cpu: &mut Cpu) {
    cpu.a = and_set_flags(cpu, cpu.a, cpu.a);
}

fn xor_a_b(cpu: &mut Cpu) {
    cpu.a = xor_set_flags(cpu, cpu.a, cpu.b);
}

fn xor_a_c(cpu: &mut Cpu) {
    cpu.a = xor_set_flags(cpu, cpu.a, cpu.c);
}

fn xor_a_d(cpu: &mut Cpu) {
    cpu.a = xor_set_flags(cpu, cpu.a, cpu.d);
}

fn xor_a_e(cpu: &mut Cpu) {
    cpu.a = xor_set_flags(cpu, cpu.a, cpu.e);
}

fn xor_a_h(cpu: &mut Cpu) {
    cpu.a = xor_set_flags(cpu, cpu.a, cpu.h);
}

fn xor_a_l(cpu: &mut Cpu) {
    cpu.a = xor_set_flags(cpu, cpu.a, cpu.l);
}

fn xor_a_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.a = xor_set_flags(cpu, cpu.a, byte);
}

fn xor_a_a(cpu: &mut Cpu) {
    cpu.a = xor_set_flags(cpu, cpu.a, cpu.a);
}

fn or_a_b(cpu: &mut Cpu) {
    cpu.a = or_set_flags(cpu, cpu.a, cpu.b);
}

fn or_a_c(cpu: &mut Cpu) {
    cpu.a = or_set_flags(cpu, cpu.a, cpu.c);
}

fn or_a_d(cpu: &mut Cpu) {
    cpu.a = or_set_flags(cpu, cpu.a, cpu.d);
}

fn or_a_e(cpu: &mut Cpu) {
    cpu.a = or_set_flags(cpu, cpu.a, cpu.e);
}

fn or_a_h(cpu: &mut Cpu) {
    cpu.a = or_set_flags(cpu, cpu.a, cpu.h);
}

fn or_a_l(cpu: &mut Cpu) {
    cpu.a = or_set_flags(cpu, cpu.a, cpu.l);
}

fn or_a_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.a = or_set_flags(cpu, cpu.a, byte);
}

fn or_a_a(cpu: &mut Cpu) {
    cpu.a = or_set_flags(cpu, cpu.a, cpu.a);
}

fn cp_a_b(cpu: &mut Cpu) {
    sub_set_flags(cpu, cpu.a, cpu.b);
}

fn cp_a_c(cpu: &mut Cpu) {
    sub_set_flags(cpu, cpu.a, cpu.c);
}

fn cp_a_d(cpu: &mut Cpu) {
    sub_set_flags(cpu, cpu.a, cpu.d);
}

fn cp_a_e(cpu: &mut Cpu) {
    sub_set_flags(cpu, cpu.a, cpu.e);
}

fn cp_a_h(cpu: &mut Cpu) {
    sub_set_flags(cpu, cpu.a, cpu.h);
}

fn cp_a_l(cpu: &mut Cpu) {
    sub_set_flags(cpu, cpu.a, cpu.l);
}

fn cp_a_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    sub_set_flags(cpu, cpu.a, byte);
}

fn cp_a_a(cpu: &mut Cpu) {
    sub_set_flags(cpu, cpu.a, cpu.a);
}

fn ret_nz(cpu: &mut Cpu) {
    cpu.tick_internal();

    if cpu.zero() {
        return;
    }

    cpu.pc = cpu.pop_word();
    cpu.tick_internal();
}

fn pop_bc(cpu: &mut Cpu) {
    let word = cpu.pop_word();
    cpu.set_bc(word);
}

fn jp_nz_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();

    if cpu.zero() {
        return;
    }

    cpu.pc = word;
    cpu.tick_internal();
}

fn jp_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();
    cpu.pc = word;
    cpu.tick_internal();
}

fn call_nz_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();

    if cpu.zero() {
        return;
    }

    cpu.tick_internal();
    cpu.push_word(cpu.pc);
    cpu.pc = word;
}

fn push_bc(cpu: &mut Cpu) {
    cpu.tick_internal();
    cpu.push_word(cpu.bc());
}

fn add_a_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.a = add_set_flags(cpu, cpu.a, byte);
}

fn rst_00h(cpu: &mut Cpu) {
    rst(cpu, 0x0000);
}

fn ret_z(cpu: &mut Cpu) {
    cpu.tick_internal();

    if !cpu.zero() {
        return;
    }

    cpu.pc = cpu.pop_word();
    cpu.tick_internal();
}

fn ret(cpu: &mut Cpu) {
    cpu.pc = cpu.pop_word();
    cpu.tick_internal();
}

fn jp_z_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();

    if !cpu.zero() {
        return;
    }

    cpu.pc = word;
    cpu.tick_internal();
}

fn call_z_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();

    if !cpu.zero() {
        return;
    }

    cpu.tick_internal();
    cpu.push_word(cpu.pc);
    cpu.pc = word;
}

fn call_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();
    cpu.tick_internal();
    cpu.push_word(cpu.pc);
    cpu.pc = word;
}

fn adc_a_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.a = add_carry_set_flags(cpu, cpu.a, byte);
}

fn rst_08h(cpu: &mut Cpu) {
    rst(cpu, 0x0008);
}

fn ret_nc(cpu: &mut Cpu) {
    cpu.tick_internal();

    if cpu.carry() {
        return;
    }

    cpu.pc = cpu.pop_word();
    cpu.tick_internal();
}

fn pop_de(cpu: &mut Cpu) {
    let word = cpu.pop_word();
    cpu.set_de(word);
}

fn jp_nc_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();

    if cpu.carry() {
        return;
    }

    cpu.pc = word;
    cpu.tick_internal();
}

fn call_nc_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();

    if cpu.carry() {
        return;
    }

    cpu.tick_internal();
    cpu.push_word(cpu.pc);
    cpu.pc = word;
}

fn push_de(cpu: &mut Cpu) {
    cpu.tick_internal();
    cpu.push_word(cpu.de());
}

fn sub_a_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.a = sub_set_flags(cpu, cpu.a, byte);
}

fn rst_10h(cpu: &mut Cpu) {
    rst(cpu, 0x0010);
}

fn ret_c(cpu: &mut Cpu) {
    cpu.tick_internal();

    if !cpu.carry() {
        return;
    }

    cpu.pc = cpu.pop_word();
    cpu.tick_internal();
}

fn reti(cpu: &mut Cpu) {
    cpu.pc = cpu.pop_word();
    cpu.tick_internal();
    cpu.enable_int();
}

fn jp_c_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();

    if !cpu.carry() {
        return;
    }

    cpu.pc = word;
    cpu.tick_internal();
}

fn call_c_u16(cpu: &mut Cpu) {
    let word = cpu.read_u16();

    if !cpu.carry() {
        return;
    }

    cpu.tick_internal();
    cpu.push_word(cpu.pc);
    cpu.pc = word;
}

fn sbc_a_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.a = sub_carry_set_flags(cpu, cpu.a, byte);
}

fn rst_18h(cpu: &mut Cpu) {
    rst(cpu, 0x0018);
}

fn ld_mff00u8_a(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.mmu.write(0xff00 + byte as u16, cpu.a);
}

fn pop_hl(cpu: &mut Cpu) {
    let word = cpu.pop_word();
    cpu.set_hl(word);
}

fn ld_mff00c_a(cpu: &mut Cpu) {
    cpu.mmu.write(0xff00 + cpu.c as u16, cpu.a);
}

fn push_hl(cpu: &mut Cpu) {
    cpu.tick_internal();
    cpu.push_word(cpu.hl());
}

fn and_a_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.a = and_set_flags(cpu, cpu.a, byte);
}

fn rst_20h(cpu: &mut Cpu) {
    rst(cpu, 0x0020);
}

fn add_sp_i8(cpu: &mut Cpu) {
    let byte = cpu.read_u8() as i8;
    cpu.sp = sp_offset_set_flags(cpu, byte);
    cpu.tick_internal();
    cpu.tick_internal();
}

fn jp_hl(cpu: &mut Cpu) {
    cpu.pc = cpu.hl();
}

fn ld_mu16_a(cpu: &mut Cpu) {
    let word = cpu.read_u16();
    cpu.mmu.write(word, cpu.a);
}

fn xor_a_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.a = xor_set_flags(cpu, cpu.a, byte);
}

fn rst_28h(cpu: &mut Cpu) {
    rst(cpu, 0x0028);
}

fn ld_a_mff00u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.a = cpu.mmu.read(0xff00 + byte as u16);
}

fn pop_af(cpu: &mut Cpu) {
    let word = cpu.pop_word();
    cpu.set_af(word);
}

fn ld_a_mff00c(cpu: &mut Cpu) {
    cpu.a = cpu.mmu.read(0xff00 + cpu.c as u16);
}

fn di(cpu: &mut Cpu) {
    cpu.disable_int();
}

fn push_af(cpu: &mut Cpu) {
    cpu.tick_internal();
    cpu.push_word(cpu.af());
}

fn or_a_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    cpu.a = or_set_flags(cpu, cpu.a, byte);
}

fn rst_30h(cpu: &mut Cpu) {
    rst(cpu, 0x0030);
}

fn ld_hl_spi8(cpu: &mut Cpu) {
    let byte = cpu.read_u8() as i8;
    let value = sp_offset_set_flags(cpu, byte);
    cpu.set_hl(value);
    cpu.tick_internal();
}

fn ld_sp_hl(cpu: &mut Cpu) {
    cpu.sp = cpu.hl();
    cpu.tick_internal();
}

fn ld_a_mu16(cpu: &mut Cpu) {
    let word = cpu.read_u16();
    cpu.a = cpu.mmu.read(word);
}

fn ei(cpu: &mut Cpu) {
    cpu.enable_int_delayed();
}

fn cp_a_u8(cpu: &mut Cpu) {
    let byte = cpu.read_u8();
    sub_set_flags(cpu, cpu.a, byte);
}

fn rst_38h(cpu: &mut Cpu) {
    rst(cpu, 0x0038);
}

fn rlc_b(cpu: &mut Cpu) {
    cpu.b = rlc(cpu, cpu.b);
}

fn rlc_c(cpu: &mut Cpu) {
    cpu.c = rlc(cpu, cpu.c);
}

fn rlc_d(cpu: &mut Cpu) {
    cpu.d = rlc(cpu, cpu.d);
}

fn rlc_e(cpu: &mut Cpu) {
    cpu.e = rlc(cpu, cpu.e);
}

fn rlc_h(cpu: &mut Cpu) {
    cpu.h = rlc(cpu, cpu.h);
}

fn rlc_l(cpu: &mut Cpu) {
    cpu.l = rlc(cpu, cpu.l);
}

fn rlc_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    let value = rlc(cpu, byte);
    cpu.mmu.write(cpu.hl(), value);
}

fn rlc_a(cpu: &mut Cpu) {
    cpu.a = rlc(cpu, cpu.a);
}

fn rrc_b(cpu: &mut Cpu) {
    cpu.b = rrc(cpu, cpu.b);
}

fn rrc_c(cpu: &mut Cpu) {
    cpu.c = rrc(cpu, cpu.c);
}

fn rrc_d(cpu: &mut Cpu) {
    cpu.d = rrc(cpu, cpu.d);
}

fn rrc_e(cpu: &mut Cpu) {
    cpu.e = rrc(cpu, cpu.e);
}

fn rrc_h(cpu: &mut Cpu) {
    cpu.h = rrc(cpu, cpu.h);
}

fn rrc_l(cpu: &mut Cpu) {
    cpu.l = rrc(cpu, cpu.l);
}

fn rrc_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    let value = rrc(cpu, byte);
    cpu.mmu.write(cpu.hl(), value);
}

fn rrc_a(cpu: &mut Cpu) {
    cpu.a = rrc(cpu, cpu.a);
}

fn rl_b(cpu: &mut Cpu) {
    cpu.b = rl(cpu, cpu.b);
}

fn rl_c(cpu: &mut Cpu) {
    cpu.c = rl(cpu, cpu.c);
}

fn rl_d(cpu: &mut Cpu) {
    cpu.d = rl(cpu, cpu.d);
}

fn rl_e(cpu: &mut Cpu) {
    cpu.e = rl(cpu, cpu.e);
}

fn rl_h(cpu: &mut Cpu) {
    cpu.h = rl(cpu, cpu.h);
}

fn rl_l(cpu: &mut Cpu) {
    cpu.l = rl(cpu, cpu.l);
}

fn rl_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    let value = rl(cpu, byte);
    cpu.mmu.write(cpu.hl(), value);
}

fn rl_a(cpu: &mut Cpu) {
    cpu.a = rl(cpu, cpu.a);
}

fn rr_b(cpu: &mut Cpu) {
    cpu.b = rr(cpu, cpu.b);
}

fn rr_c(cpu: &mut Cpu) {
    cpu.c = rr(cpu, cpu.c);
}

fn rr_d(cpu: &mut Cpu) {
    cpu.d = rr(cpu, cpu.d);
}

fn rr_e(cpu: &mut Cpu) {
    cpu.e = rr(cpu, cpu.e);
}

fn rr_h(cpu: &mut Cpu) {
    cpu.h = rr(cpu, cpu.h);
}

fn rr_l(cpu: &mut Cpu) {
    cpu.l = rr(cpu, cpu.l);
}

fn rr_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    let value = rr(cpu, byte);
    cpu.mmu.write(cpu.hl(), value);
}

fn rr_a(cpu: &mut Cpu) {
    cpu.a = rr(cpu, cpu.a);
}

fn sla_b(cpu: &mut Cpu) {
    cpu.b = sla(cpu, cpu.b);
}

fn sla_c(cpu: &mut Cpu) {
    cpu.c = sla(cpu, cpu.c);
}

fn sla_d(cpu: &mut Cpu) {
    cpu.d = sla(cpu, cpu.d);
}

fn sla_e(cpu: &mut Cpu) {
    cpu.e = sla(cpu, cpu.e);
}

fn sla_h(cpu: &mut Cpu) {
    cpu.h = sla(cpu, cpu.h);
}

fn sla_l(cpu: &mut Cpu) {
    cpu.l = sla(cpu, cpu.l);
}

fn sla_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    let value = sla(cpu, byte);
    cpu.mmu.write(cpu.hl(), value);
}

fn sla_a(cpu: &mut Cpu) {
    cpu.a = sla(cpu, cpu.a);
}

fn sra_b(cpu: &mut Cpu) {
    cpu.b = sra(cpu, cpu.b);
}

fn sra_c(cpu: &mut Cpu) {
    cpu.c = sra(cpu, cpu.c);
}

fn sra_d(cpu: &mut Cpu) {
    cpu.d = sra(cpu, cpu.d);
}

fn sra_e(cpu: &mut Cpu) {
    cpu.e = sra(cpu, cpu.e);
}

fn sra_h(cpu: &mut Cpu) {
    cpu.h = sra(cpu, cpu.h);
}

fn sra_l(cpu: &mut Cpu) {
    cpu.l = sra(cpu, cpu.l);
}

fn sra_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    let value = sra(cpu, byte);
    cpu.mmu.write(cpu.hl(), value);
}

fn sra_a(cpu: &mut Cpu) {
    cpu.a = sra(cpu, cpu.a);
}

fn swap_b(cpu: &mut Cpu) {
    cpu.b = swap(cpu, cpu.b);
}

fn swap_c(cpu: &mut Cpu) {
    cpu.c = swap(cpu, cpu.c);
}

fn swap_d(cpu: &mut Cpu) {
    cpu.d = swap(cpu, cpu.d);
}

fn swap_e(cpu: &mut Cpu) {
    cpu.e = swap(cpu, cpu.e);
}

fn swap_h(cpu: &mut Cpu) {
    cpu.h = swap(cpu, cpu.h);
}

fn swap_l(cpu: &mut Cpu) {
    cpu.l = swap(cpu, cpu.l);
}

fn swap_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    let value = swap(cpu, byte);
    cpu.mmu.write(cpu.hl(), value);
}

fn swap_a(cpu: &mut Cpu) {
    cpu.a = swap(cpu, cpu.a);
}

fn srl_b(cpu: &mut Cpu) {
    cpu.b = srl(cpu, cpu.b);
}

fn srl_c(cpu: &mut Cpu) {
    cpu.c = srl(cpu, cpu.c);
}

fn srl_d(cpu: &mut Cpu) {
    cpu.d = srl(cpu, cpu.d);
}

fn srl_e(cpu: &mut Cpu) {
    cpu.e = srl(cpu, cpu.e);
}

fn srl_h(cpu: &mut Cpu) {
    cpu.h = srl(cpu, cpu.h);
}

fn srl_l(cpu: &mut Cpu) {
    cpu.l = srl(cpu, cpu.l);
}

fn srl_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    let value = srl(cpu, byte);
    cpu.mmu.write(cpu.hl(), value);
}

fn srl_a(cpu: &mut Cpu) {
    cpu.a = srl(cpu, cpu.a);
}

fn bit_0_b(cpu: &mut Cpu) {
    bit(cpu, 0, cpu.b);
}

fn bit_0_c(cpu: &mut Cpu) {
    bit(cpu, 0, cpu.c);
}

fn bit_0_d(cpu: &mut Cpu) {
    bit(cpu, 0, cpu.d);
}

fn bit_0_e(cpu: &mut Cpu) {
    bit(cpu, 0, cpu.e);
}

fn bit_0_h(cpu: &mut Cpu) {
    bit(cpu, 0, cpu.h);
}

fn bit_0_l(cpu: &mut Cpu) {
    bit(cpu, 0, cpu.l);
}

fn bit_0_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    bit(cpu, 0, byte);
}

fn bit_0_a(cpu: &mut Cpu) {
    bit(cpu, 0, cpu.a);
}

fn bit_1_b(cpu: &mut Cpu) {
    bit(cpu, 1, cpu.b);
}

fn bit_1_c(cpu: &mut Cpu) {
    bit(cpu, 1, cpu.c);
}

fn bit_1_d(cpu: &mut Cpu) {
    bit(cpu, 1, cpu.d);
}

fn bit_1_e(cpu: &mut Cpu) {
    bit(cpu, 1, cpu.e);
}

fn bit_1_h(cpu: &mut Cpu) {
    bit(cpu, 1, cpu.h);
}

fn bit_1_l(cpu: &mut Cpu) {
    bit(cpu, 1, cpu.l);
}

fn bit_1_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    bit(cpu, 1, byte);
}

fn bit_1_a(cpu: &mut Cpu) {
    bit(cpu, 1, cpu.a);
}

fn bit_2_b(cpu: &mut Cpu) {
    bit(cpu, 2, cpu.b);
}

fn bit_2_c(cpu: &mut Cpu) {
    bit(cpu, 2, cpu.c);
}

fn bit_2_d(cpu: &mut Cpu) {
    bit(cpu, 2, cpu.d);
}

fn bit_2_e(cpu: &mut Cpu) {
    bit(cpu, 2, cpu.e);
}

fn bit_2_h(cpu: &mut Cpu) {
    bit(cpu, 2, cpu.h);
}

fn bit_2_l(cpu: &mut Cpu) {
    bit(cpu, 2, cpu.l);
}

fn bit_2_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    bit(cpu, 2, byte);
}

fn bit_2_a(cpu: &mut Cpu) {
    bit(cpu, 2, cpu.a);
}

fn bit_3_b(cpu: &mut Cpu) {
    bit(cpu, 3, cpu.b);
}

fn bit_3_c(cpu: &mut Cpu) {
    bit(cpu, 3, cpu.c);
}

fn bit_3_d(cpu: &mut Cpu) {
    bit(cpu, 3, cpu.d);
}

fn bit_3_e(cpu: &mut Cpu) {
    bit(cpu, 3, cpu.e);
}

fn bit_3_h(cpu: &mut Cpu) {
    bit(cpu, 3, cpu.h);
}

fn bit_3_l(cpu: &mut Cpu) {
    bit(cpu, 3, cpu.l);
}

fn bit_3_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    bit(cpu, 3, byte);
}

fn bit_3_a(cpu: &mut Cpu) {
    bit(cpu, 3, cpu.a);
}

fn bit_4_b(cpu: &mut Cpu) {
    bit(cpu, 4, cpu.b);
}

fn bit_4_c(cpu: &mut Cpu) {
    bit(cpu, 4, cpu.c);
}

fn bit_4_d(cpu: &mut Cpu) {
    bit(cpu, 4, cpu.d);
}

fn bit_4_e(cpu: &mut Cpu) {
    bit(cpu, 4, cpu.e);
}

fn bit_4_h(cpu: &mut Cpu) {
    bit(cpu, 4, cpu.h);
}

fn bit_4_l(cpu: &mut Cpu) {
    bit(cpu, 4, cpu.l);
}

fn bit_4_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    bit(cpu, 4, byte);
}

fn bit_4_a(cpu: &mut Cpu) {
    bit(cpu, 4, cpu.a);
}

fn bit_5_b(cpu: &mut Cpu) {
    bit(cpu, 5, cpu.b);
}

fn bit_5_c(cpu: &mut Cpu) {
    bit(cpu, 5, cpu.c);
}

fn bit_5_d(cpu: &mut Cpu) {
    bit(cpu, 5, cpu.d);
}

fn bit_5_e(cpu: &mut Cpu) {
    bit(cpu, 5, cpu.e);
}

fn bit_5_h(cpu: &mut Cpu) {
    bit(cpu, 5, cpu.h);
}

fn bit_5_l(cpu: &mut Cpu) {
    bit(cpu, 5, cpu.l);
}

fn bit_5_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    bit(cpu, 5, byte);
}

fn bit_5_a(cpu: &mut Cpu) {
    bit(cpu, 5, cpu.a);
}

fn bit_6_b(cpu: &mut Cpu) {
    bit(cpu, 6, cpu.b);
}

fn bit_6_c(cpu: &mut Cpu) {
    bit(cpu, 6, cpu.c);
}

fn bit_6_d(cpu: &mut Cpu) {
    bit(cpu, 6, cpu.d);
}

fn bit_6_e(cpu: &mut Cpu) {
    bit(cpu, 6, cpu.e);
}

fn bit_6_h(cpu: &mut Cpu) {
    bit(cpu, 6, cpu.h);
}

fn bit_6_l(cpu: &mut Cpu) {
    bit(cpu, 6, cpu.l);
}

fn bit_6_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    bit(cpu, 6, byte);
}

fn bit_6_a(cpu: &mut Cpu) {
    bit(cpu, 6, cpu.a);
}

fn bit_7_b(cpu: &mut Cpu) {
    bit(cpu, 7, cpu.b);
}

fn bit_7_c(cpu: &mut Cpu) {
    bit(cpu, 7, cpu.c);
}

fn bit_7_d(cpu: &mut Cpu) {
    bit(cpu, 7, cpu.d);
}

fn bit_7_e(cpu: &mut Cpu) {
    bit(cpu, 7, cpu.e);
}

fn bit_7_h(cpu: &mut Cpu) {
    bit(cpu, 7, cpu.h);
}

fn bit_7_l(cpu: &mut Cpu) {
    bit(cpu, 7, cpu.l);
}

fn bit_7_mhl(cpu: &mut Cpu) {
    let byte = cpu.mmu.read(cpu.hl());
    bit(cpu, 7, byte);
}

fn bit_7_a(cpu: &mut Cpu) {
    bit(cpu, 7, cpu.a);
}

fn res_0_b(cpu: &mut Cpu) {
    cpu.b &= !(1 << 0);
}

fn res_0_c(cpu: &mut Cpu) {
    cpu.c &= !(1 << 0);
}

fn res_0_d(cpu: &mut Cpu) {
    cpu.d &= !(1 << 0);
}

fn res_0_e(cpu: &mut Cpu) {
    cpu.e &= !(1 << 0);
}

fn res_0_h(cpu: &mut Cpu) {
    cpu.h &= !(1 << 0);
}

fn res_0_l(cpu: &mut Cpu) {
    cpu.l &= !(1 << 0);
}

fn res_0_mhl(cpu: &mut Cpu) {
    res_mhl(cpu, 0);
}

fn res_0_a(cpu: &mut Cpu) {
    cpu.a &= !(1 << 0);
}

fn res_1_b(cpu: &mut Cpu) {
    cpu.b &= !(1 << 1);
}

fn res_1_c(cpu: &mut Cpu) {
    cpu.c &= !(1 << 1);
}

fn res_1_d(cpu: &mut Cpu) {
    cpu.d &= !(1 << 1);
}

fn res_1_e(cpu: &mut Cpu) {
    cpu.e &= !(1 << 1);
}

fn res_1_h(cpu: &mut Cpu) {
    cpu.h &= !(1 << 1);
}

fn res_1_l(cpu: &mut Cpu) {
    cpu.l &= !(1 << 1);
}

fn res_1_mhl(cpu: &mut Cpu) {
    res_mhl(cpu, 1);
}

fn res_1_a(cpu: &mut Cpu) {
    cpu.a &= !(1 << 1);
}

fn res_2_b(cpu: &mut Cpu) {
    cpu.b &= !(1 << 2);
}

fn res_2_c(cpu: &mut Cpu) {
    cpu.c &= !(1 << 2);
}

fn res_2_d(cpu: &mut Cpu) {
    cpu.d &= !(1 << 2);
}

fn res_2_e(cpu: &mut Cpu) {
    cpu.e &= !(1 << 2);
}

fn res_2_h(cpu: &mut Cpu) {
    cpu.h &= !(1 << 2);
}

fn res_2_l(cpu: &mut Cpu) {
    cpu.l &= !(1 << 2);
}

fn res_2_mhl(cpu: &mut Cpu) {
    res_mhl(cpu, 2);
}

fn res_2_a(cpu: &mut Cpu) {
    cpu.a &= !(1 << 2);
}

fn res_3_b(cpu: &mut Cpu) {
    cpu.b &= !(1 << 3);
}

fn res_3_c(cpu: &mut Cpu) {
    cpu.c &= !(1 << 3);
}

fn res_3_d(cpu: &mut Cpu) {
    cpu.d &= !(1 << 3);
}

fn res_3_e(cpu: &mut Cpu) {
    cpu.e &= !(1 << 3);
}

fn res_3_h(cpu: &mut Cpu) {
    cpu.h &= !(1 << 3);
}

fn res_3_l(cpu: &mut Cpu) {
    cpu.l &= !(1 << 3);
}

fn res_3_mhl(cpu: &mut Cpu) {
    res_mhl(cpu, 3);
}

fn res_3_a(cpu: &mut Cpu) {
    cpu.a &= !(1 << 3);
}

fn res_4_b(cpu: &mut Cpu) {
    cpu.b &= !(1 << 4);
}

fn res_4_c(cpu: &mut Cpu) {
    cpu.c &= !(1 << 4);
}

fn res_4_d(cpu: &mut Cpu) {
    cpu.d &= !(1 << 4);
}

fn res_4_e(cpu: &mut Cpu) {
    cpu.e &= !(1 << 4);
}

fn res_4_h(cpu: &mut Cpu) {
    cpu.h &= !(1 << 4);
}

fn res_4_l(cpu: &mut Cpu) {
    cpu.l &= !(1 << 4);
}

fn res_4_mhl(cpu: &mut Cpu) {
    res_mhl(cpu, 4);
}

fn res_4_a(cpu: &mut Cpu) {
    cpu.a &= !(1 << 4);
}

fn res_5_b(cpu: &mut Cpu) {
    cpu.b &= !(1 << 5);
}

fn res_5_c(cpu: &mut Cpu) {
    cpu.c &= !(1 << 5);
}

fn res_5_d(cpu: &mut Cpu) {
    cpu.d &= !(1 << 5);
}

fn res_5_e(cpu: &mut Cpu) {
    cpu.e &= !(1 << 5);
}

fn res_5_h(cpu: &mut Cpu) {
    cpu.h &= !(1 << 5);
}

fn res_5_l(cpu: &mut Cpu) {
    cpu.l &= !(1 << 5);
}

fn res_5_mhl(cpu: &mut Cpu) {
    res_mhl(cpu, 5);
}

fn res_5_a(cpu: &mut Cpu) {
    cpu.a &= !(1 << 5);
}

fn res_6_b(cpu: &mut Cpu) {
    cpu.b &= !(1 << 6);
}

fn res_6_c(cpu: &mut Cpu) {
    cpu.c &= !(1 << 6);
}

fn res_6_d(cpu: &mut Cpu) {
    cpu.d &= !(1 << 6);
}

fn res_6_e(cpu: &mut Cpu) {
    cpu.e &= !(1 << 6);
}

fn res_6_h(cpu: &mut Cpu) {
    cpu.h &= !(1 << 6);
}

fn res_6_l(cpu: &mut Cpu) {
    cpu.l &= !(1 << 6);
}

fn res_6_mhl(cpu: &mut Cpu) {
    res_mhl(cpu, 6);
}

fn res_6_a(cpu: &mut Cpu) {
    cpu.a &= !(1 << 6);
}

fn res_7_b(cpu: &mut Cpu) {
    cpu.b &= !(1 << 7);
}

fn res_7_c(cpu: &mut Cpu) {
    cpu.c &= !(1 << 7);
}

fn res_7_d(cpu: &mut Cpu) {
    cpu.d &= !(1 << 7);
}

fn res_7_e(cpu: &mut Cpu) {
    cpu.e &= !(1 << 7);
}

fn res_7_h(cpu: &mut Cpu) {
    cpu.h &= !(1 << 7);
}

fn res_7_l(cpu: &mut Cpu) {
    cpu.l &= !(1 << 7);
}

fn res_7_mhl(cpu: &mut Cpu) {
    res_mhl(cpu, 7);
}

fn res_7_a(cpu: &mut Cpu) {
    cpu.a &= !(1 << 7);
}

fn set_0_b(cpu: &mut Cpu) {
    cpu.b |= 1 << 0;
}

fn set_0_c(cpu: &mut Cpu) {
    cpu.c |= 1 << 0;
}

fn set_0_d(cpu: &mut Cpu) {
    cpu.d |= 1 << 0;
}

fn set_0_e(cpu: &mut Cpu) {
    cpu.e |= 1 << 0;
}

fn set_0_h(cpu: &mut Cpu) {
    cpu.h |= 1 << 0;
}

fn set_0_l(cpu: &mut Cpu) {
    cpu.l |= 1 << 0;
}

fn set_0_mhl(cpu: &mut Cpu) {
    set_mhl(cpu, 0);
}

fn set_0_a(cpu: &mut Cpu) {
    cpu.a |= 1 << 0;
}

fn set_1_b(cpu: &mut Cpu) {
    cpu.b |= 1 << 1;
}

fn set_1_c(cpu: &mut Cpu) {
    cpu.c |= 1 << 1;
}

fn set_1_d(cpu: &mut Cpu) {
    cpu.d |= 1 << 1;
}

fn set_1_e(cpu: &mut Cpu) {
    cpu.e |= 1 << 1;
}

fn set_1_h(cpu: &mut Cpu) {
    cpu.h |= 1 << 1;
}

fn set_1_l(cpu: &mut Cpu) {
    cpu.l |= 1 << 1;
}

fn set_1_mhl(cpu: &mut Cpu) {
    set_mhl(cpu, 1);
}

fn set_1_a(cpu: &mut Cpu) {
    cpu.a |= 1 << 1;
}

fn set_2_b(cpu: &mut Cpu) {
    cpu.b |= 1 << 2;
}

fn set_2_c(cpu: &mut Cpu) {
    cpu.c |= 1 << 2;
}

fn set_2_d(cpu: &mut Cpu) {
    cpu.d |= 1 << 2;
}

fn set_2_e(cpu: &mut Cpu) {
    cpu.e |= 1 << 2;
}

fn set_2_h(cpu: &mut Cpu) {
    cpu.h |= 1 << 2;
}

fn set_2_l(cpu: &mut Cpu) {
    cpu.l |= 1 << 2;
}

fn set_2_mhl(cpu: &mut Cpu) {
    set_mhl(cpu, 2);
}

fn set_2_a(cpu: &mut Cpu) {
    cpu.a |= 1 << 2;
}

fn set_3_b(cpu: &mut Cpu) {
    cpu.b |= 1 << 3;
}

fn set_3_c(cpu: &mut Cpu) {
    cpu.c |= 1 << 3;
}

fn set_3_d(cpu: &mut Cpu) {
    cpu.d |= 1 << 3;
}

fn set_3_e(cpu: &mut Cpu) {
    cpu.e |= 1 << 3;
}

fn set_3_h(cpu: &mut Cpu) {
    cpu.h |= 1 << 3;
}

fn set_3_l(cpu: &mut Cpu) {
    cpu.l |= 1 << 3;
}

fn set_3_mhl(cpu: &mut Cpu) {
    set_mhl(cpu, 3);
}

fn set_3_a(cpu: &mut Cpu) {
    cpu.a |= 1 << 3;
}

fn set_4_b(cpu: &mut Cpu) {
    cpu.b |= 1 << 4;
}

fn set_4_c(cpu: &mut Cpu) {
    cpu.c |= 1 << 4;
}

fn set_4_d(cpu: &mut Cpu) {
    cpu.d |= 1 << 4;
}

fn set_4_e(cpu: &mut Cpu) {
    cpu.e |= 1 << 4;
}

fn set_4_h(cpu: &mut Cpu) {
    cpu.h |= 1 << 4;
}

fn set_4_l(cpu: &mut Cpu) {
    cpu.l |= 1 << 4;
}

fn set_4_mhl(cpu: &mut Cpu) {
    set_mhl(cpu, 4);
}

fn set_4_a(cpu: &mut Cpu) {
    cpu.a |= 1 << 4;
}

fn set_5_b(cpu: &mut Cpu) {
    cpu.b |= 1 << 5;
}

fn set_5_c(cpu: &mut Cpu) {
    cpu.c |= 1 << 5;
}

fn set_5_d(cpu: &mut Cpu) {
    cpu.d |= 1 << 5;
}

fn set_5_e(cpu: &mut Cpu) {
    cpu.e |= 1 << 5;
}

fn set_5_h(cpu: &mut Cpu) {
    cpu.h |= 1 << 5;
}

fn set_5_l(cpu: &mut Cpu) {
    cpu.l |= 1 << 5;
}

fn set_5_mhl(cpu: &mut Cpu) {
    set_mhl(cpu, 5);
}

fn set_5_a(cpu: &mut Cpu) {
    cpu.a |= 1 << 5;
}

fn set_6_b(cpu: &mut Cpu) {
    cpu.b |= 1 << 6;
}

fn set_6_c(cpu: &mut Cpu) {
    cpu.c |= 1 << 6;
}

fn set_6_d(cpu: &mut Cpu) {
    cpu.d |= 1 << 6;
}

fn set_6_e(cpu: &mut Cpu) {
    cpu.e |= 1 << 6;
}

fn set_6_h(cpu: &mut Cpu) {
    cpu.h |= 1 << 6;
}

fn set_6_l(cpu: &mut Cpu) {
    cpu.l |= 1 << 6;
}

fn set_6_mhl(cpu: &mut Cpu) {
    set_mhl(cpu, 6);
}

fn set_6_a(cpu: &mut Cpu) {
    cpu.a |= 1 << 6;
}

fn set_7_b(cpu: &mut Cpu) {
    cpu.b |= 1 << 7;
}

fn set_7_c(cpu: &mut Cpu) {
    cpu.c |= 1 << 7;
}

fn set_7_d(cpu: &mut Cpu) {
    cpu.d |= 1 << 7;
}

fn set_7_e(cpu: &mut Cpu) {
    cpu.e |= 1 << 7;
}

fn set_7_h(cpu: &mut Cpu) {
    cpu.h |= 1 << 7;
}

fn set_7_l(cpu: &mut Cpu) {
    cpu.l |= 1 << 7;
}

fn set_7_mhl(cpu: &mut Cpu) {
    set_mhl(cpu, 7);
}

fn set_7_a(cpu: &mut Cpu) {
    cpu.a |= 1 << 7;
}

fn add_set_flags(cpu: &mut Cpu, first: u8, second: u8) -> u8 {
    let first = first as u32;
    let second = second as u32;

    let result = first.wrapping_add(second);
    let result_b = result as u8;

    cpu.set_sub(false);
    cpu.set_zero(result_b == 0);
    cpu.set_half_carry((first ^ second ^ result) & 0x10 == 0x10);
    cpu.set_carry((result & 0x100) == 0x100);

    result_b
}

fn add_carry_set_flags(cpu: &mut Cpu, first: u8, second: u8) -> u8 {
    let first = first as u32;
    let second = second as u32;
    let carry = cpu.carry() as u32;

    let result = first.wrapping_add(second).wrapping_add(carry);
    let result_b = result as u8;

    cpu.set_sub(false);
    cpu.set_zero(result_b == 0);
    cpu.set_half_carry((first ^ second ^ result) & 0x10 == 0x10);
    cpu.set_carry((result & 0x100) == 0x100);

    result_b
}

fn sub_set_flags(cpu: &mut Cpu, first: u8, second: u8) -> u8 {
    let first = first as u32;
    let second = second as u32;

    let result = first.wrapping_sub(second);
    let result_b = result as u8;

    cpu.set_sub(true);
    cpu.set_zero(result_b == 0);
    cpu.set_half_carry((first ^ second ^ result) & 0x10 == 0x10);
    cpu.set_carry((result & 0x100) == 0x100);

    result_b
}

fn sub_carry_set_flags(cpu: &mut Cpu, first: u8, second: u8) -> u8 {
    let first = first as u32;
    let second = second as u32;
    let carry = cpu.carry() as u32;

    let result = first.wrapping_sub(second).wrapping_sub(carry);
    let result_b = result as u8;

    cpu.set_sub(true);
    cpu.set_zero(result_b == 0);
    cpu.set_half_carry((first ^ second ^ result) & 0x10 == 0x10);
    cpu.set_carry((result & 0x100) == 0x100);

    result_b
}

fn and_set_flags(cpu: &mut Cpu, first: u8, second: u8) -> u8 {
    let result = first & second;

    cpu.set_sub(false);
    cpu.set_zero(result == 0);
    cpu.set_half_carry(true);
    cpu.set_carry(false);

    result
}

fn xor_set_flags(cpu: &mut Cpu, first: u8, second: u8) -> u8 {
    let result = first ^ second;

    cpu.set_sub(false);
    cpu.set_zero(result == 0);
    cpu.set_half_carry(false);
    cpu.set_carry(false);

    result
}

fn or_set_flags(cpu: &mut Cpu, first: u8, second: u8) -> u8 {
    let result = first | second;

    cpu.set_sub(false);
    cpu.set_zero(result == 0);
    cpu.set_half_carry(false);
    cpu.set_carry(false);

    result
}

/// 16 bit addition through the ALU, takes one extra internal
/// machine cycle. The half carry is computed from bit 11.
fn add_u16_u16(cpu: &mut Cpu, first: u16, second: u16) -> u16 {
    let first = first as u32;
    let second = second as u32;
    let result = first.wrapping_add(second);

    cpu.set_sub(false);
    cpu.set_half_carry((first ^ second ^ result) & 0x1000 == 0x1000);
    cpu.set_carry((result & 0x10000) == 0x10000);

    cpu.tick_internal();

    result as u16
}

/// Computes `SP + i8` with the flag semantics shared by
/// `ADD SP, i8` and `LD HL, SP+i8`: half carry from bit 3 and
/// carry from bit 7 of the unsigned low byte addition.
fn sp_offset_set_flags(cpu: &mut Cpu, byte: i8) -> u16 {
    let sp = cpu.sp;
    let offset = byte as u16;
    let result = sp.wrapping_add(offset);

    cpu.set_zero(false);
    cpu.set_sub(false);
    cpu.set_half_carry((sp & 0x000f) + (offset & 0x000f) > 0x000f);
    cpu.set_carry((sp & 0x00ff) + (offset & 0x00ff) > 0x00ff);

    result
}

fn rlc(cpu: &mut Cpu, value: u8) -> u8 {
    let carry = value >> 7;
    let result = (value << 1) | carry;

    cpu.set_sub(false);
    cpu.set_zero(result == 0);
    cpu.set_half_carry(false);
    cpu.set_carry(carry == 0x1);

    result
}

fn rrc(cpu: &mut Cpu, value: u8) -> u8 {
    let carry = value & 0x01;
    let result = (value >> 1) | (carry << 7);

    cpu.set_sub(false);
    cpu.set_zero(result == 0);
    cpu.set_half_carry(false);
    cpu.set_carry(carry == 0x1);

    result
}

fn rl(cpu: &mut Cpu, value: u8) -> u8 {
    let carry = cpu.carry() as u8;
    let result = (value << 1) | carry;

    cpu.set_sub(false);
    cpu.set_zero(result == 0);
    cpu.set_half_carry(false);
    cpu.set_carry((value & 0x80) == 0x80);

    result
}

fn rr(cpu: &mut Cpu, value: u8) -> u8 {
    let carry = cpu.carry() as u8;
    let result = (value >> 1) | (carry << 7);

    cpu.set_sub(false);
    cpu.set_zero(result == 0);
    cpu.set_half_carry(false);
    cpu.set_carry((value & 0x01) == 0x01);

    result
}

fn sla(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value << 1;

    cpu.set_sub(false);
    cpu.set_zero(result == 0);
    cpu.set_half_carry(false);
    cpu.set_carry((value & 0x80) == 0x80);

    result
}

fn sra(cpu: &mut Cpu, value: u8) -> u8 {
    let result = (value >> 1) | (value & 0x80);

    cpu.set_sub(false);
    cpu.set_zero(result == 0);
    cpu.set_half_carry(false);
    cpu.set_carry((value & 0x1) == 0x1);

    result
}

fn srl(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value >> 1;

    cpu.set_sub(false);
    cpu.set_zero(result == 0);
    cpu.set_half_carry(false);
    cpu.set_carry((value & 0x1) == 0x1);

    result
}

fn swap(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.set_sub(false);
    cpu.set_zero(value == 0);
    cpu.set_half_carry(false);
    cpu.set_carry(false);

    (value << 4) | (value >> 4)
}

fn bit(cpu: &mut Cpu, bit: u8, value: u8) {
    cpu.set_sub(false);
    cpu.set_zero(value & (1 << bit) == 0);
    cpu.set_half_carry(true);
}

fn res_mhl(cpu: &mut Cpu, bit: u8) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.mmu.write(cpu.hl(), byte & !(1 << bit));
}

fn set_mhl(cpu: &mut Cpu, bit: u8) {
    let byte = cpu.mmu.read(cpu.hl());
    cpu.mmu.write(cpu.hl(), byte | (1 << bit));
}

/// Helper function for RST instructions, takes the internal
/// machine cycle of the SP adjustment, pushes the current PC
/// to the stack and jumps to the provided address.
fn rst(cpu: &mut Cpu, addr: u16) {
    cpu.tick_internal();
    cpu.push_word(cpu.pc);
    cpu.pc = addr;
}

#[cfg(test)]
mod tests {
    use super::{EXTENDED, INSTRUCTIONS};

    #[test]
    fn test_table_sizes() {
        assert_eq!(INSTRUCTIONS.len(), 256);
        assert_eq!(EXTENDED.len(), 256);
    }

    #[test]
    fn test_illegal_slots() {
        for opcode in [
            0xd3u8, 0xdb, 0xdd, 0xe3, 0xe4, 0xeb, 0xec, 0xed, 0xf4, 0xfc, 0xfd,
        ] {
            assert_eq!(INSTRUCTIONS[opcode as usize].1, "ILLEGAL");
        }
    }
}
