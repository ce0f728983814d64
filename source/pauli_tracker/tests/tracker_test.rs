use pauli_tracker::{
    Base, BitVec, BufferedVector, Frames, Full, Live, Map, MappedVector, Pauli, PauliDense,
    PauliEnum, PauliStack, PauliTuple, QubitID, Tracker,
};
use proptest::prelude::*;

const NUM_QUBITS: usize = 4;
const NUM_FRAMES: usize = 12;

type FramesMap = Frames<Map<PauliStack<BitVec>>>;

#[derive(Clone, Copy, Debug)]
enum Op {
    H(QubitID),
    S(QubitID),
    Sdg(QubitID),
    Sz(QubitID),
    Szdg(QubitID),
    Sx(QubitID),
    Sxdg(QubitID),
    Sy(QubitID),
    Sydg(QubitID),
    Hxy(QubitID),
    Hyz(QubitID),
    Sh(QubitID),
    Hs(QubitID),
    Shs(QubitID),
    Cx(QubitID, QubitID),
    Cy(QubitID, QubitID),
    Cz(QubitID, QubitID),
    Swap(QubitID, QubitID),
    Iswap(QubitID, QubitID),
    Iswapdg(QubitID, QubitID),
    MoveXToX(QubitID, QubitID),
    MoveXToZ(QubitID, QubitID),
    MoveZToX(QubitID, QubitID),
    MoveZToZ(QubitID, QubitID),
    TrackX(QubitID),
    TrackY(QubitID),
    TrackZ(QubitID),
}

fn apply<T: Tracker>(tracker: &mut T, op: Op) {
    match op {
        Op::H(qubit) => tracker.h(qubit),
        Op::S(qubit) => tracker.s(qubit),
        Op::Sdg(qubit) => tracker.sdg(qubit),
        Op::Sz(qubit) => tracker.sz(qubit),
        Op::Szdg(qubit) => tracker.szdg(qubit),
        Op::Sx(qubit) => tracker.sx(qubit),
        Op::Sxdg(qubit) => tracker.sxdg(qubit),
        Op::Sy(qubit) => tracker.sy(qubit),
        Op::Sydg(qubit) => tracker.sydg(qubit),
        Op::Hxy(qubit) => tracker.hxy(qubit),
        Op::Hyz(qubit) => tracker.hyz(qubit),
        Op::Sh(qubit) => tracker.sh(qubit),
        Op::Hs(qubit) => tracker.hs(qubit),
        Op::Shs(qubit) => tracker.shs(qubit),
        Op::Cx(control, target) => tracker.cx(control, target),
        Op::Cy(control, target) => tracker.cy(control, target),
        Op::Cz(first, second) => tracker.cz(first, second),
        Op::Swap(first, second) => tracker.swap(first, second),
        Op::Iswap(first, second) => tracker.iswap(first, second),
        Op::Iswapdg(first, second) => tracker.iswapdg(first, second),
        Op::MoveXToX(source, destination) => tracker.move_x_to_x(source, destination),
        Op::MoveXToZ(source, destination) => tracker.move_x_to_z(source, destination),
        Op::MoveZToX(source, destination) => tracker.move_z_to_x(source, destination),
        Op::MoveZToZ(source, destination) => tracker.move_z_to_z(source, destination),
        Op::TrackX(qubit) => tracker.track_x(qubit),
        Op::TrackY(qubit) => tracker.track_y(qubit),
        Op::TrackZ(qubit) => tracker.track_z(qubit),
    }
}

fn qubit() -> impl Strategy<Value = QubitID> {
    0..NUM_QUBITS
}

// Two distinct qubits.
fn qubit_pair() -> impl Strategy<Value = (QubitID, QubitID)> {
    (0..NUM_QUBITS, 0..NUM_QUBITS - 1).prop_map(|(first, second)| {
        (first, if second >= first { second + 1 } else { second })
    })
}

fn arbitrary_clifford() -> impl Strategy<Value = Op> {
    (0..24usize, qubit(), qubit_pair()).prop_map(|(kind, qubit, (first, second))| match kind {
        0 => Op::H(qubit),
        1 => Op::S(qubit),
        2 => Op::Sdg(qubit),
        3 => Op::Sz(qubit),
        4 => Op::Szdg(qubit),
        5 => Op::Sx(qubit),
        6 => Op::Sxdg(qubit),
        7 => Op::Sy(qubit),
        8 => Op::Sydg(qubit),
        9 => Op::Hxy(qubit),
        10 => Op::Hyz(qubit),
        11 => Op::Sh(qubit),
        12 => Op::Hs(qubit),
        13 => Op::Shs(qubit),
        14 => Op::Cx(first, second),
        15 => Op::Cy(first, second),
        16 => Op::Cz(first, second),
        17 => Op::Swap(first, second),
        18 => Op::Iswap(first, second),
        19 => Op::Iswapdg(first, second),
        20 => Op::MoveXToX(first, second),
        21 => Op::MoveXToZ(first, second),
        22 => Op::MoveZToX(first, second),
        _ => Op::MoveZToZ(first, second),
    })
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => arbitrary_clifford(),
        1 => qubit().prop_map(Op::TrackX),
        1 => qubit().prop_map(Op::TrackY),
        1 => qubit().prop_map(Op::TrackZ),
    ]
}

type Rows = Vec<(Vec<bool>, Vec<bool>)>;

fn arbitrary_rows() -> impl Strategy<Value = Rows> {
    proptest::collection::vec(
        (
            proptest::collection::vec(any::<bool>(), NUM_FRAMES),
            proptest::collection::vec(any::<bool>(), NUM_FRAMES),
        ),
        NUM_QUBITS,
    )
}

fn stack_from_rows(rows: &(Vec<bool>, Vec<bool>)) -> PauliStack<BitVec> {
    PauliStack::from_rows(
        rows.0.iter().copied().collect(),
        rows.1.iter().copied().collect(),
    )
}

fn frames_from_rows(rows: &Rows) -> FramesMap {
    let storage = rows
        .iter()
        .enumerate()
        .map(|(qubit, rows)| (qubit, stack_from_rows(rows)))
        .collect();
    Frames::new_unchecked(storage, NUM_FRAMES)
}

// Equality up to the implicit trailing identity frames of lazily padded
// stacks.
fn logically_equal(left: &FramesMap, right: &FramesMap) -> bool {
    left.num_frames() == right.num_frames()
        && left.as_storage().len() == right.as_storage().len()
        && left.as_storage().iter().all(|(qubit, stack)| {
            right.as_storage().get(qubit).is_some_and(|other| {
                (0..left.num_frames()).all(|frame| stack.get(frame) == other.get(frame))
            })
        })
}

proptest! {
    // Law: every self-inverse gate pair composes to the identity.
    #[test]
    fn double_gates_are_identities(rows in arbitrary_rows()) {
        let tracker = frames_from_rows(&rows);
        let cases: [(&str, fn(&mut FramesMap)); 11] = [
            ("h h", |tracker| { tracker.h(0); tracker.h(0); }),
            ("s sdg", |tracker| { tracker.s(1); tracker.sdg(1); }),
            ("sx sxdg", |tracker| { tracker.sx(2); tracker.sxdg(2); }),
            ("sy sydg", |tracker| { tracker.sy(3); tracker.sydg(3); }),
            ("hxy hxy", |tracker| { tracker.hxy(0); tracker.hxy(0); }),
            ("hyz hyz", |tracker| { tracker.hyz(1); tracker.hyz(1); }),
            ("cx cx", |tracker| { tracker.cx(0, 1); tracker.cx(0, 1); }),
            ("cy cy", |tracker| { tracker.cy(2, 3); tracker.cy(2, 3); }),
            ("cz cz", |tracker| { tracker.cz(1, 2); tracker.cz(1, 2); }),
            ("swap swap", |tracker| { tracker.swap(0, 3); tracker.swap(0, 3); }),
            ("iswap iswapdg", |tracker| { tracker.iswap(1, 3); tracker.iswapdg(1, 3); }),
        ];
        for (name, double_gate) in cases {
            let mut transformed = tracker.clone();
            double_gate(&mut transformed);
            prop_assert_eq!(&transformed, &tracker, "{} is not an identity", name);
        }
    }

    // Law: the composite gates match their factorizations.
    #[test]
    fn composites_match_their_factors(rows in arbitrary_rows()) {
        let tracker = frames_from_rows(&rows);

        let mut composite = tracker.clone();
        composite.sh(0);
        let mut factored = tracker.clone();
        factored.h(0);
        factored.s(0);
        prop_assert_eq!(composite, factored, "sh");

        let mut composite = tracker.clone();
        composite.hs(1);
        let mut factored = tracker.clone();
        factored.s(1);
        factored.h(1);
        prop_assert_eq!(composite, factored, "hs");

        let mut composite = tracker.clone();
        composite.shs(2);
        let mut factored = tracker.clone();
        factored.s(2);
        factored.h(2);
        factored.s(2);
        prop_assert_eq!(composite, factored, "shs");
    }

    // Law: cz is symmetric, and tracking commutes with the gates that do
    // not spread the tracked row.
    #[test]
    fn commutation_laws(rows in arbitrary_rows()) {
        let tracker = frames_from_rows(&rows);

        let mut forward = tracker.clone();
        forward.cz(0, 1);
        let mut backward = tracker.clone();
        backward.cz(1, 0);
        prop_assert_eq!(forward, backward, "cz symmetry");

        // X on the target commutes with cx. The comparison is logical: the
        // orders pad the untouched stacks differently.
        let mut track_first = tracker.clone();
        track_first.track_x(1);
        track_first.cx(0, 1);
        let mut gate_first = tracker.clone();
        gate_first.cx(0, 1);
        gate_first.track_x(1);
        prop_assert!(
            logically_equal(&track_first, &gate_first),
            "track_x on the target"
        );

        // Z on the control commutes with cx.
        let mut track_first = tracker.clone();
        track_first.track_z(0);
        track_first.cx(0, 1);
        let mut gate_first = tracker.clone();
        gate_first.cx(0, 1);
        gate_first.track_z(0);
        prop_assert!(
            logically_equal(&track_first, &gate_first),
            "track_z on the control"
        );
    }

    // Law: frame i of a Frames tracker evolves exactly like a Live tracker
    // started from frame i.
    #[test]
    fn frames_rows_evolve_like_live_trackers(
        rows in arbitrary_rows(),
        cliffords in proptest::collection::vec(arbitrary_clifford(), 0..40),
    ) {
        let mut frames = frames_from_rows(&rows);
        for clifford in &cliffords {
            apply(&mut frames, *clifford);
        }
        for frame in 0..NUM_FRAMES {
            let mut live: Live<Map<PauliTuple>> = Live::wrap(
                rows.iter()
                    .enumerate()
                    .map(|(qubit, rows)| (qubit, stack_from_rows(rows).get(frame)))
                    .collect(),
            );
            for clifford in &cliffords {
                apply(&mut live, *clifford);
            }
            for (qubit, stack) in frames.as_storage().iter() {
                prop_assert_eq!(
                    live.as_storage().get(qubit).copied(),
                    Some(stack.get(frame)),
                    "qubit {} in frame {}",
                    qubit,
                    frame
                );
            }
        }
    }

    // The scalar payloads implement the same tableau.
    #[test]
    fn scalar_payloads_agree(ops in proptest::collection::vec(arbitrary_op(), 0..60)) {
        let mut enumerated: Live<Map<PauliEnum>> = Live::init(NUM_QUBITS);
        let mut dense: Live<Map<PauliDense>> = Live::init(NUM_QUBITS);
        let mut tuple: Live<Map<PauliTuple>> = Live::init(NUM_QUBITS);
        for op in ops {
            apply(&mut enumerated, op);
            apply(&mut dense, op);
            apply(&mut tuple, op);
        }
        for (qubit, pauli) in enumerated.as_storage().iter() {
            let expected = pauli.tableau_encoding();
            let dense_pauli = dense.as_storage().get(qubit).expect("same qubits");
            let tuple_pauli = tuple.as_storage().get(qubit).expect("same qubits");
            prop_assert_eq!(dense_pauli.tableau_encoding(), expected, "qubit {}", qubit);
            prop_assert_eq!(tuple_pauli.tableau_encoding(), expected, "qubit {}", qubit);
        }
    }

    // The storage backends implement the same tracker.
    #[test]
    fn storage_backends_agree(ops in proptest::collection::vec(arbitrary_op(), 0..60)) {
        let mut on_map: FramesMap = Frames::init(NUM_QUBITS);
        let mut on_buffer: Frames<BufferedVector<PauliStack<BitVec>>> = Frames::init(NUM_QUBITS);
        let mut on_mapped: Frames<MappedVector<PauliStack<BitVec>>> = Frames::init(NUM_QUBITS);
        for op in ops {
            apply(&mut on_map, op);
            apply(&mut on_buffer, op);
            apply(&mut on_mapped, op);
        }
        prop_assert_eq!(on_map.num_frames(), on_buffer.num_frames());
        prop_assert_eq!(on_map.num_frames(), on_mapped.num_frames());
        for (qubit, stack) in on_map.as_storage().iter() {
            prop_assert_eq!(on_buffer.as_storage().get(qubit), Some(stack));
            prop_assert_eq!(on_mapped.as_storage().get(qubit), Some(stack));
        }
    }

    // Law: the stacked transpose is an involution on equal-length stacks.
    #[test]
    fn stacked_transpose_is_an_involution(rows in arbitrary_rows()) {
        let storage: BufferedVector<PauliStack<BitVec>> =
            rows.iter().map(stack_from_rows).collect();
        let transposed = Frames::new_unchecked(storage.clone(), NUM_FRAMES)
            .stacked_transpose(NUM_FRAMES);
        let back = Frames::new_unchecked(transposed, NUM_QUBITS)
            .stacked_transpose(NUM_QUBITS);
        prop_assert_eq!(back, storage);
    }
}

#[test]
fn buffered_payloads_measure_from_the_back() {
    let mut tracker: Live<BufferedVector<PauliDense>> = Live::init(2);
    tracker.track_x(0);
    tracker.cx(0, 1);
    assert!(tracker.measure(0).is_err());
    assert_eq!(tracker.measure(1), Ok(PauliDense::new_x()));
    assert_eq!(tracker.measure(0), Ok(PauliDense::new_x()));
}

#[test]
fn iswap_matches_its_direct_form() {
    // iswap maps (x_a, z_a, x_b, z_b) to
    // (x_b, z_b ^ x_a ^ x_b, x_a, z_a ^ x_a ^ x_b).
    for encoding_first in 0..4u8 {
        for encoding_second in 0..4u8 {
            let mut tracker: Live<Map<PauliTuple>> = Live::wrap(
                [
                    (0, PauliTuple::try_from(encoding_first).expect("valid")),
                    (1, PauliTuple::try_from(encoding_second).expect("valid")),
                ]
                .into_iter()
                .collect(),
            );
            tracker.iswap(0, 1);
            let first = *tracker.as_storage().get(0).expect("present");
            let second = *tracker.as_storage().get(1).expect("present");

            let (x_a, z_a) = (encoding_first & 0b10 != 0, encoding_first & 0b01 != 0);
            let (x_b, z_b) = (encoding_second & 0b10 != 0, encoding_second & 0b01 != 0);
            assert_eq!(first, PauliTuple::new_product(x_b, z_b ^ x_a ^ x_b));
            assert_eq!(second, PauliTuple::new_product(x_a, z_a ^ x_a ^ x_b));
        }
    }
}
