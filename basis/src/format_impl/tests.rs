#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::basis::{BasisFormat, DumpOptions};
    use crate::cgto::{AtomBasis, BasisSetDocument, Contraction, Ecp, EcpRadialPart};
    use crate::element::ElementTable;
    use crate::error::{BasisError, Location, Warning};

    fn table() -> ElementTable {
        ElementTable::iupac()
    }

    fn shell(am: u32, exponents: &[f64], coefficients: &[f64]) -> Contraction {
        Contraction::new(am, exponents.to_vec(), coefficients.to_vec())
    }

    /// Hydrogen and carbon with an s/p pair sharing exponents.
    fn sample_document() -> BasisSetDocument {
        let mut h = AtomBasis::new(1);
        h.functions.push(shell(0, &[13.0107010, 1.9622572], &[0.019682158, 0.13796524]));
        h.functions.push(shell(1, &[0.8], &[1.0]));

        let mut c = AtomBasis::new(6);
        c.functions.push(shell(0, &[71.6168370, 13.0450960], &[0.15432897, 0.53532814]));
        c.functions.push(shell(0, &[2.9412494, 0.6834831], &[-0.09996723, 0.39951283]));
        c.functions.push(shell(1, &[2.9412494, 0.6834831], &[0.15591627, 0.60768372]));

        BasisSetDocument::new(vec![h, c])
    }

    fn toy_ecp() -> Ecp {
        Ecp {
            name: "HF-ECP".to_string(),
            max_angular_momentum: 0,
            n_core_electrons: 60,
            radial_parts: vec![EcpRadialPart {
                title: "s potential".to_string(),
                powers: vec![2],
                exponents: vec![12.0],
                coefficients: vec![-25.0],
            }],
        }
    }

    fn options() -> DumpOptions {
        DumpOptions {
            name: Some("sto-test".to_string()),
            description: Some("test basis".to_string()),
        }
    }

    fn assert_line_error(err: BasisError, expected_line: usize) {
        match err {
            BasisError::Format {
                location: Location::Line(line),
                ..
            } => assert_eq!(line, expected_line),
            other => panic!("expected format error at line {}, got {:?}", expected_line, other),
        }
    }

    const GAUSSIAN94_REFERENCE: &str = concat!(
        "****\n",
        "H     0\n",
        "S   2   1.00\n",
        "     13.0107010     0.019682158\n",
        "      1.9622572     0.13796524\n",
        "P   1   1.00\n",
        "      0.8000000      1.0000000\n",
        "****\n",
        "C     0\n",
        "S   2   1.00\n",
        "     71.6168370     0.15432897\n",
        "     13.0450960     0.53532814\n",
        "S   2   1.00\n",
        "      2.9412494    -0.099967230\n",
        "      0.6834831     0.39951283\n",
        "P   2   1.00\n",
        "      2.9412494     0.15591627\n",
        "      0.6834831     0.60768372\n",
        "****\n",
    );

    const NWCHEM_REFERENCE: &str = concat!(
        "basis\n",
        "# hydrogen\n",
        "  H  S\n",
        "         13.0107010     0.0196821580\n",
        "          1.9622572     0.137965240\n",
        "  H  P\n",
        "          0.8000000     1.00000000\n",
        "# carbon\n",
        "  C  S\n",
        "         71.6168370     0.154328970\n",
        "         13.0450960     0.535328140\n",
        "  C  S\n",
        "          2.9412494    -0.0999672300\n",
        "          0.6834831     0.399512830\n",
        "  C  P\n",
        "          2.9412494     0.155916270\n",
        "          0.6834831     0.607683720\n",
        "end\n",
    );

    const ORCA_REFERENCE: &str = concat!(
        "%basis\n",
        "NewGTO 1\n",
        " S    2\n",
        "  1      13.0107010     0.0196821580\n",
        "  2       1.9622572     0.137965240\n",
        " P    1\n",
        "  1       0.8000000     1.00000000\n",
        "end\n",
        "NewGTO 6\n",
        " S    2\n",
        "  1      71.6168370     0.154328970\n",
        "  2      13.0450960     0.535328140\n",
        " S    2\n",
        "  1       2.9412494    -0.0999672300\n",
        "  2       0.6834831     0.399512830\n",
        " P    2\n",
        "  1       2.9412494     0.155916270\n",
        "  2       0.6834831     0.607683720\n",
        "end\n",
        "end",
    );

    const QCHEM_REFERENCE: &str = concat!(
        "$basis\n",
        " H  0\n",
        "S   2  1.00\n",
        "      13.0107010      0.019682158\n",
        "       1.9622572       0.13796524\n",
        "P   1  1.00\n",
        "       0.8000000        1.0000000\n",
        "****\n",
        " C  0\n",
        "S   2  1.00\n",
        "      71.6168370       0.15432897\n",
        "      13.0450960       0.53532814\n",
        "S   2  1.00\n",
        "       2.9412494     -0.099967230\n",
        "       0.6834831       0.39951283\n",
        "P   2  1.00\n",
        "       2.9412494       0.15591627\n",
        "       0.6834831       0.60768372\n",
        "$end",
    );

    const TURBOMOLE_REFERENCE: &str = concat!(
        "$basis\n",
        "*\n",
        "h sto-test\n",
        "*\n",
        "    2  s\n",
        "          13.0107010     0.019682158\n",
        "           1.9622572     0.13796524\n",
        "    1  p\n",
        "           0.8000000      1.0000000\n",
        "*\n",
        "c sto-test\n",
        "*\n",
        "    2  s\n",
        "          71.6168370     0.15432897\n",
        "          13.0450960     0.53532814\n",
        "    2  s\n",
        "           2.9412494    -0.099967230\n",
        "           0.6834831     0.39951283\n",
        "    2  p\n",
        "           2.9412494     0.15591627\n",
        "           0.6834831     0.60768372\n",
        "*\n",
        "$end",
    );

    const CFOUR_REFERENCE: &str = concat!(
        "H:STO-TEST\n",
        "test basis\n",
        "\n",
        "  2\n",
        "    0    1\n",
        "    1    1\n",
        "    2    1\n",
        "\n",
        "    13.0107010     1.9622572\n",
        " 0.0196822 \n",
        " 0.1379652 \n",
        "\n",
        "     0.8000000\n",
        " 1.0000000 \n",
        "\n",
        "C:STO-TEST\n",
        "test basis\n",
        "\n",
        "  2\n",
        "    0    1\n",
        "    2    1\n",
        "    4    2\n",
        "\n",
        "    71.6168370    13.0450960     2.9412494     0.6834831\n",
        " 0.1543290  0.0000000 \n",
        " 0.5353281  0.0000000 \n",
        " 0.0000000 -0.0999672 \n",
        " 0.0000000  0.3995128 \n",
        "\n",
        "     2.9412494     0.6834831\n",
        " 0.1559163 \n",
        " 0.6076837 \n",
        "\n",
    );

    // ---------------------------------------------------------------- parser

    const HYDROGEN_BLOCK: &str = "****
H     0
S    2   1.00
      13.0107010              0.19682158E-01
       1.9622572              0.13796524
****
";

    #[test]
    fn test_parse_hydrogen_block() {
        let doc = gaussian94::parse(HYDROGEN_BLOCK, &table()).unwrap();
        assert_eq!(doc.atoms.len(), 1);
        let h = &doc.atoms[0];
        assert_eq!(h.atomic_number, 1);
        assert_eq!(h.functions.len(), 1);
        assert_eq!(h.functions[0].angular_momentum, 0);
        assert_eq!(h.functions[0].exponents, vec![13.0107010, 1.9622572]);
        assert_eq!(h.functions[0].coefficients, vec![0.019682158, 0.13796524]);
        assert!(h.ecp.is_none());

        let dumped = gaussian94::dumps(&doc, &table()).unwrap();
        let lines: Vec<&str> = dumped.text.lines().collect();
        assert_eq!(lines.first(), Some(&"****"));
        assert_eq!(lines.last(), Some(&"****"));
        assert_eq!(lines[3], "     13.0107010     0.019682158");
        assert_eq!(lines[4], "      1.9622572     0.13796524");
        assert!(dumped.warnings.is_empty());
    }

    #[test]
    fn test_parse_sp_shell() {
        let text = "****
C 0
SP   3   1.00
  0.7868272350D+01 -0.1193324198D+00  0.6899906659D-01
  0.1881288540D+01 -0.1608541517D+00  0.3164239610D+00
  0.5442492580D+00  0.1143456438D+01  0.7443082909D+00
****
";
        let doc = gaussian94::parse(text, &table()).unwrap();
        let funs = &doc.atoms[0].functions;
        assert_eq!(funs.len(), 2);
        assert_eq!(funs[0].angular_momentum, 0);
        assert_eq!(funs[1].angular_momentum, 1);
        assert_eq!(funs[0].exponents, funs[1].exponents);
        assert_eq!(funs[0].exponents, vec![7.868272350, 1.881288540, 0.5442492580]);
        assert_eq!(funs[0].coefficients, vec![-0.1193324198, -0.1608541517, 1.143456438]);
        assert_eq!(funs[1].coefficients, vec![0.06899906659, 0.3164239610, 0.7443082909]);
    }

    #[test]
    fn test_fortran_and_e_notation_agree() {
        let fortran = "****\nHe 0\nS 1 1.00\n 1.234D+02 1.0D+00\n****\n";
        let plain = "****\nHe 0\nS 1 1.00\n 1.234E+02 1.0E+00\n****\n";
        let a = gaussian94::parse(fortran, &table()).unwrap();
        let b = gaussian94::parse(plain, &table()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.atoms[0].functions[0].exponents[0], 123.4);
    }

    #[test]
    fn test_parse_lowercase_and_comments() {
        let text = "! Basis set: test
! a second comment line
****
he 0
! comment inside a block
d 1 1.00
 0.5 1.0
****
";
        let doc = gaussian94::parse(text, &table()).unwrap();
        assert_eq!(doc.atoms[0].atomic_number, 2);
        assert_eq!(doc.atoms[0].functions[0].angular_momentum, 2);
    }

    #[test]
    fn test_parse_multiple_elements_in_order() {
        let text = gaussian94::dumps(&sample_document(), &table()).unwrap().text;
        let doc = gaussian94::parse(&text, &table()).unwrap();
        assert_eq!(doc.atomic_numbers(), vec![1, 6]);
    }

    #[test]
    fn test_parse_requires_marker() {
        let err = gaussian94::parse("H 0\nS 1 1.00\n 1.0 1.0\n", &table()).unwrap_err();
        assert!(matches!(
            err,
            BasisError::Format {
                location: Location::Document,
                ..
            }
        ));
        assert!(gaussian94::parse("", &table()).is_err());
    }

    #[test]
    fn test_parse_rejects_content_before_first_marker() {
        let text = "! fine\nstray\n****\nH 0\nS 1 1.00\n 1.0 1.0\n****\n";
        assert_line_error(gaussian94::parse(text, &table()).unwrap_err(), 2);
    }

    #[test]
    fn test_cgto_parser_rejects_trailing_content() {
        let text = format!("{}H 0\n", HYDROGEN_BLOCK);
        assert_line_error(gaussian94::parse_cgto(&text, &table()).unwrap_err(), 7);
        // Comments after the last marker are fine
        let text = format!("{}! the end\n", HYDROGEN_BLOCK);
        assert!(gaussian94::parse_cgto(&text, &table()).is_ok());
    }

    #[test]
    fn test_parse_rejects_trailing_noise() {
        let text = format!("{}garbage\n", HYDROGEN_BLOCK);
        let err = gaussian94::parse(&text, &table()).unwrap_err();
        assert_line_error(err.clone(), 7);
        assert!(err.to_string().contains("unrecognized trailing content"));
    }

    #[test]
    fn test_parse_unknown_element() {
        let text = "****\nXy 0\nS 1 1.00\n 1.0 1.0\n****\n";
        let err = gaussian94::parse(text, &table()).unwrap_err();
        assert_line_error(err.clone(), 2);
        assert!(err.to_string().contains("Xy"));
    }

    #[test]
    fn test_parse_unknown_angular_momentum() {
        let text = "****\nH 0\nQ 1 1.00\n 1.0 1.0\n****\n";
        assert_line_error(gaussian94::parse(text, &table()).unwrap_err(), 3);
    }

    #[test]
    fn test_parse_bad_primitive_count() {
        let text = "****\nH 0\nS x 1.00\n 1.0 1.0\n****\n";
        assert_line_error(gaussian94::parse(text, &table()).unwrap_err(), 3);
        let text = "****\nH 0\nS 0 1.00\n****\n";
        assert_line_error(gaussian94::parse(text, &table()).unwrap_err(), 3);
    }

    #[test]
    fn test_parse_wrong_column_count() {
        let text = "****\nH 0\nS 2 1.00\n 1.0 1.0\n 2.0 1.0 3.0\n****\n";
        let err = gaussian94::parse(text, &table()).unwrap_err();
        assert_line_error(err.clone(), 5);
        assert!(err.to_string().contains("2.0 1.0 3.0"));

        let text = "****\nC 0\nSP 1 1.00\n 1.0 1.0\n****\n";
        assert_line_error(gaussian94::parse(text, &table()).unwrap_err(), 4);
    }

    #[test]
    fn test_parse_non_numeric_field() {
        let text = "****\nH 0\nS 1 1.00\n 1.0 one\n****\n";
        assert_line_error(gaussian94::parse(text, &table()).unwrap_err(), 4);
    }

    #[test]
    fn test_parse_truncated_shell() {
        let text = "****\nH 0\nS 3 1.00\n 1.0 1.0\n 2.0 1.0\n****\n";
        assert_line_error(gaussian94::parse(text, &table()).unwrap_err(), 3);
    }

    #[test]
    fn test_parse_empty_block() {
        let text = "****\n****\n";
        assert_line_error(gaussian94::parse(text, &table()).unwrap_err(), 2);
    }

    #[test]
    fn test_parse_huge_primitive_count() {
        let text = "****\nH 0\nS 18446744073709551615 1.00\n1.0 1.0\n****\n";
        assert_line_error(gaussian94::parse(text, &table()).unwrap_err(), 3);

        // past usize::MAX the count no longer parses as an integer
        let text = "****\nH 0\nS 18446744073709551616 1.00\n1.0 1.0\n****\n";
        assert_line_error(gaussian94::parse(text, &table()).unwrap_err(), 3);
    }

    // ------------------------------------------------------------------- ECP

    const HF_WITH_ECP: &str = "****
Hf     0
S   1   1.00
      0.5000000              1.0000000
P   1   1.00
      0.1000000              1.0000000
****
HF     0
HF-ECP     2     60
d potential
  1
2     12.0000000            -25.0000000
s-d potential
  2
2     13.0                  426.8
2      6.5D+00               36.0
p-d potential
  1
2     11.3                  291.1
";

    #[test]
    fn test_parse_ecp_section() {
        let doc = gaussian94::parse(HF_WITH_ECP, &table()).unwrap();
        assert_eq!(doc.atoms.len(), 1);
        let hf = &doc.atoms[0];
        assert_eq!(hf.atomic_number, 72);
        assert_eq!(hf.functions.len(), 2);

        let ecp = hf.ecp.as_ref().unwrap();
        assert_eq!(ecp.name, "HF-ECP");
        assert_eq!(ecp.max_angular_momentum, 2);
        assert_eq!(ecp.n_core_electrons, 60);
        assert_eq!(ecp.radial_parts.len(), 3);
        assert_eq!(ecp.radial_parts[0].title, "d potential");
        assert_eq!(ecp.radial_parts[1].powers, vec![2, 2]);
        assert_eq!(ecp.radial_parts[1].exponents, vec![13.0, 6.5]);
        assert_eq!(ecp.radial_parts[1].coefficients, vec![426.8, 36.0]);
        assert_eq!(ecp.radial_parts[2].coefficients, vec![291.1]);
        assert!(hf.validate().is_ok());
    }

    #[test]
    fn test_cgto_parser_rejects_ecp_section() {
        assert_line_error(gaussian94::parse_cgto(HF_WITH_ECP, &table()).unwrap_err(), 8);
    }

    #[test]
    fn test_ecp_only_element_is_appended() {
        let text = format!(
            "{}W 0\nW-ECP 0 60\ns potential\n1\n2 1.0 2.0\n",
            HF_WITH_ECP
        );
        let doc = gaussian94::parse(&text, &table()).unwrap();
        assert_eq!(doc.atomic_numbers(), vec![72, 74]);
        let w = &doc.atoms[1];
        assert!(w.functions.is_empty());
        assert_eq!(w.ecp.as_ref().unwrap().name, "W-ECP");
    }

    #[test]
    fn test_ecp_for_unknown_first_element_is_trailing_content() {
        let text = HF_WITH_ECP.replace("HF     0", "W     0");
        let err = gaussian94::parse(&text, &table()).unwrap_err();
        assert!(err.to_string().contains("unrecognized trailing content"));
    }

    #[test]
    fn test_ecp_premature_end() {
        // Second radial part announces two components but only one follows
        let text = HF_WITH_ECP.replace("p-d potential\n  1\n", "p-d potential\n  2\n");
        match gaussian94::parse(&text, &table()).unwrap_err() {
            BasisError::Format {
                location: Location::EcpRecord { record, line },
                message,
            } => {
                assert_eq!(record, 1);
                assert_eq!(line, 19);
                assert!(message.contains("premature end"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_ecp_huge_counts_end_prematurely() {
        let text = HF_WITH_ECP.replace("p-d potential\n  1\n", "p-d potential\n  4000000000000\n");
        let err = gaussian94::parse(&text, &table()).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("premature end"));

        let text = HF_WITH_ECP.replace("HF-ECP     2     60", "HF-ECP     4294967295     60");
        let err = gaussian94::parse(&text, &table()).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("premature end"));
    }

    #[test]
    fn test_ecp_bad_fields() {
        let text = HF_WITH_ECP.replace("2      6.5D+00", "2      six");
        match gaussian94::parse(&text, &table()).unwrap_err() {
            BasisError::Format {
                location: Location::EcpRecord { record, line },
                ..
            } => assert_eq!((record, line), (1, 16)),
            other => panic!("unexpected error {:?}", other),
        }

        let text = format!("{}Hf 1\n", HF_WITH_ECP);
        match gaussian94::parse(&text, &table()).unwrap_err() {
            BasisError::Format {
                location: Location::EcpRecord { record, .. },
                message,
            } => {
                assert_eq!(record, 2);
                assert!(message.contains("<symbol> 0"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_ecp_record() {
        let text = format!(
            "{}Hf 0\nHF-ECP 0 60\ns potential\n1\n2 1.0 2.0\n",
            HF_WITH_ECP
        );
        let err = gaussian94::parse(&text, &table()).unwrap_err();
        assert!(err.to_string().contains("second ECP definition"));
    }

    // ---------------------------------------------------------------- dumpers

    #[test]
    fn test_gaussian94_dumps_reference() {
        let dumped = gaussian94::dumps(&sample_document(), &table()).unwrap();
        assert_eq!(dumped.text, GAUSSIAN94_REFERENCE);
    }

    #[test]
    fn test_gaussian94_round_trip() {
        let doc = sample_document();
        let text = gaussian94::dumps(&doc, &table()).unwrap().text;
        let loaded = gaussian94::parse(&text, &table()).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_gaussian94_dump_is_idempotent() {
        let once = gaussian94::parse(HF_WITH_ECP, &table()).unwrap();
        let first = gaussian94::dumps(&once, &table()).unwrap().text;
        let twice = gaussian94::parse(&first, &table()).unwrap();
        let second = gaussian94::dumps(&twice, &table()).unwrap().text;
        assert_eq!(first, second);
    }

    #[test]
    fn test_nwchem_dumps_reference() {
        let dumped = nwchem::dumps(&sample_document(), &table()).unwrap();
        assert_eq!(dumped.text, NWCHEM_REFERENCE);
        assert!(dumped.warnings.is_empty());
    }

    #[test]
    fn test_orca_dumps_reference() {
        let dumped = orca::dumps(&sample_document()).unwrap();
        assert_eq!(dumped.text, ORCA_REFERENCE);
    }

    #[test]
    fn test_qchem_dumps_reference() {
        let dumped = qchem::dumps(&sample_document(), &table()).unwrap();
        assert_eq!(dumped.text, QCHEM_REFERENCE);
    }

    #[test]
    fn test_turbomole_dumps_reference() {
        let dumped = turbomole::dumps(&sample_document(), &table(), &options()).unwrap();
        assert_eq!(dumped.text, TURBOMOLE_REFERENCE);
        assert_eq!(
            dumped.warnings,
            vec![Warning::Experimental {
                format: "turbomole".to_string()
            }]
        );
    }

    #[test]
    fn test_cfour_dumps_reference() {
        let dumped = cfour::dumps(&sample_document(), &table(), &options()).unwrap();
        assert_eq!(dumped.text, CFOUR_REFERENCE);
    }

    #[test]
    fn test_cfour_zero_fill() {
        let mut atom = AtomBasis::new(8);
        atom.functions.push(shell(0, &[10.0, 2.0], &[0.3, 0.7]));
        atom.functions.push(shell(0, &[2.0, 0.5], &[-0.2, 1.1]));
        atom.functions.push(shell(1, &[3.0], &[1.0]));

        let blocks = cfour::tabulate(&atom);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].angular_momentum, 0);
        assert_eq!(blocks[0].n_contractions, 2);
        assert_eq!(blocks[0].exponents, vec![10.0, 2.0, 0.5]);
        assert_eq!(
            blocks[0].coefficients,
            vec![vec![0.3, 0.0], vec![0.7, -0.2], vec![0.0, 1.1]]
        );
        assert_eq!(blocks[1].exponents, vec![3.0]);
        assert_eq!(blocks[1].coefficients, vec![vec![1.0]]);
    }

    #[test]
    fn test_cfour_near_duplicate_exponents_stay_apart() {
        let mut atom = AtomBasis::new(1);
        atom.functions.push(shell(0, &[1.0], &[0.5]));
        atom.functions.push(shell(0, &[1.0 + 1e-12], &[0.25]));

        let blocks = cfour::tabulate(&atom);
        assert_eq!(blocks[0].exponents, vec![1.0 + 1e-12, 1.0]);
        assert_eq!(blocks[0].coefficients, vec![vec![0.0, 0.25], vec![0.5, 0.0]]);
    }

    #[test]
    fn test_cfour_wraps_exponents_at_five() {
        let exps: Vec<f64> = (1..=7).map(|i| i as f64).collect();
        let mut atom = AtomBasis::new(1);
        atom.functions.push(Contraction::new(0, exps.clone(), vec![0.1; 7]));
        let doc = BasisSetDocument::new(vec![atom]);
        let text = cfour::dumps(&doc, &table(), &options()).unwrap().text;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[7], "");
        assert_eq!(lines[8].len(), 5 * 14);
        assert_eq!(lines[9].len(), 2 * 14);
        assert_eq!(lines[9], "     2.0000000     1.0000000");
    }

    #[test]
    fn test_all_dumpers_reject_length_mismatch() {
        let mut atom = AtomBasis::new(1);
        atom.functions.push(shell(0, &[1.0, 2.0], &[1.0]));
        let doc = BasisSetDocument::new(vec![atom]);
        for format in BasisFormat::ALL {
            let err = format.dumps(&doc, &table(), &options()).unwrap_err();
            assert!(err.is_precondition(), "{} accepted a ragged shell", format);
        }
    }

    #[test]
    fn test_dumpers_warn_about_ecp() {
        let mut doc = sample_document();
        doc.atoms[1].ecp = Some(toy_ecp());
        for format in BasisFormat::ALL {
            if format == BasisFormat::Json {
                continue;
            }
            let dumped = format.dumps(&doc, &table(), &options()).unwrap();
            assert!(
                dumped.warnings.iter().any(|w| matches!(
                    w,
                    Warning::EcpIgnored { atomic_numbers, .. } if atomic_numbers == &vec![6]
                )),
                "{} did not warn about ECP data",
                format
            );
        }
    }

    #[test]
    fn test_gaussian94_drops_ecp_but_keeps_shells() {
        let mut doc = sample_document();
        doc.atoms[0].ecp = Some(toy_ecp());
        let dumped = gaussian94::dumps(&doc, &table()).unwrap();
        assert_eq!(dumped.text, GAUSSIAN94_REFERENCE);
        assert_eq!(dumped.warnings.len(), 1);
    }

    #[test]
    fn test_dumpers_reject_angular_momentum_without_letter() {
        let mut atom = AtomBasis::new(1);
        atom.functions.push(shell(13, &[1.0], &[1.0]));
        let doc = BasisSetDocument::new(vec![atom]);
        assert!(gaussian94::dumps(&doc, &table()).unwrap_err().is_precondition());
        assert!(orca::dumps(&doc).unwrap_err().is_precondition());
    }
}
