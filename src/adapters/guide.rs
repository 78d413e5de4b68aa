/// The measurement walkthrough printed by `--guide`.
pub const MEASUREMENT_GUIDE: &str = "\
How to Measure

1. Underbust Measurement
  - Measure directly under your bust
  - Keep the tape parallel to the ground
  - Tape should be snug but not tight
  - Take a deep breath and measure
  - Round to the nearest whole number

2. Bust Measurement
  - Measure at the fullest part of your bust
  - Keep the tape horizontal
  - Ensure tape is not too tight
  - Wear an unpadded bra for accuracy
  - Round to the nearest whole number

Measurement Tips
  - Stand straight and relaxed
  - Use a soft measuring tape
  - Measure in front of a mirror
  - Take multiple measurements for accuracy
  - Ask for help if needed";
