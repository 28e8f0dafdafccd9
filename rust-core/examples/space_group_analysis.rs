/// Example walking through the symmetry-operator API
///
/// Builds space group Pbca from its operator strings, checks closure,
/// classifies its centering and computes site multiplicities. A body-centred
/// group is then assembled by convolution.
use crystal_symmetry::{AffineTransform, SymmetryGroup};
use nalgebra::Vector3;

fn main() -> crystal_symmetry::Result<()> {
    println!("=== Symmetry operators of Pbca ===\n");

    let pbca = SymmetryGroup::from_xyz_strings([
        "x,y,z",
        "-x+1/2,-y,z+1/2",
        "x+1/2,-y+1/2,-z",
        "-x,y+1/2,-z+1/2",
        "-x,-y,-z",
        "x-1/2,y,-z-1/2",
        "-x-1/2,y-1/2,z",
        "x,-y-1/2,z-1/2",
    ])?;

    // Example 1: parsing and composition
    println!("1. Parsing and composing operators:");
    let glide: AffineTransform = "x+1/2,-y+1/2,-z".parse()?;
    let screw: AffineTransform = "-x+1/2,-y,z+1/2".parse()?;
    let product = glide.concatenate(&screw);
    println!("   ({}) * ({}) = {}", glide, screw, product);
    println!("   normalized: {}\n", product.normalized());

    // Example 2: closure
    println!("2. Closure tests:");
    println!("   is_space_group: {}", pbca.is_space_group()?);
    let mut subset = SymmetryGroup::from_transforms(pbca.transforms()[..3].to_vec());
    println!("   first three operators form a group: {}\n", subset.is_group()?);

    // Example 3: centering and point-group operators
    println!("3. Centering:");
    println!("   Pbca centering: {}", pbca.centering());
    for op in &pbca.non_translations() {
        println!("   translation-free operator: {}", op);
    }
    println!();

    // Example 4: site multiplicities
    println!("4. Site multiplicities:");
    for point in [Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.1, 0.2, 0.3)] {
        println!(
            "   ({:.2}, {:.2}, {:.2}) -> {}",
            point.x,
            point.y,
            point.z,
            pbca.space_group_multiplicity(Some(point))
        );
    }
    println!();

    // Example 5: body-centred group by convolution
    println!("5. Convolution:");
    let inversion = SymmetryGroup::from_xyz_strings(["x,y,z", "-x,-y,-z"])?;
    let body = SymmetryGroup::from_xyz_strings(["x,y,z", "x+1/2,y+1/2,z+1/2"])?;
    let mut i_one = inversion.convolute(&body);
    i_one.normalize_crystallographically();
    println!("   I-1 operators: {:?}", i_one.to_xyz_strings());
    println!("   centering: {}", i_one.centering());
    println!("   space group: {}", i_one.is_space_group()?);

    Ok(())
}
