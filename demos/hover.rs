use nalgebra::Vector3;
use rotorcraft_dynamics::{quad_x, Drag, GroundEffect, Multirotor, RotorSpec, VehicleKinematics};

const DT: f64 = 0.004;

fn main() -> Result<(), rotorcraft_dynamics::Error> {
    // 5" propeller bench fit, thrust in newtons against normalized throttle
    let rotor = RotorSpec::new(1.0, [9.5, 2.1, 0.0], [0.14, 0.03, 0.0], 0.03, 0.06);

    let mut copter = Multirotor::builder()
        .motors(quad_x(rotor, 0.12))
        .drag(Drag::new(0.25, 0.003))
        .ground_effect(GroundEffect::new([-0.25, 0.9, 0.4], 0.127, 2.0, 0.3))
        .build()?;
    copter.set_wind(Vector3::new(2.0, 0.0, 0.0));

    let mut kinematics = VehicleKinematics::at_rest(Vector3::zeros());
    for step in 0..=250 {
        let time = step as f64 * DT;
        kinematics.position.z = -0.5 * time;

        let wrench = copter.update(time, &kinematics, &[0.55; 4])?;
        if step % 25 == 0 {
            println!(
                "t={:.3}s height={:.2}m force={:?} torque={:?}",
                time,
                kinematics.height(),
                wrench.force.as_slice(),
                wrench.torque.as_slice()
            );
        }
    }

    Ok(())
}
