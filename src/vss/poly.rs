use crate::{
    vss::{errors::VSSError, suite::Suite},
    Scalar,
};

use ark_ec::{AffineCurve, ProjectiveCurve};
use ark_ff::{Field, One, PrimeField, Zero};
use ark_poly::univariate::DensePolynomial;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, SerializationError, Write};


// A polynomial with the various coefficients in the scalar field of C
pub type Polynomial<C> = DensePolynomial<Scalar<C>>;


// Evaluation point of share index i. Shares live at 1, ..., n so that no index
// ever evaluates the free coefficient.
pub fn eval_point<C: AffineCurve>(index: usize) -> Scalar<C> {
    Scalar::<C>::from((index + 1) as u64)
}


/* PubPoly is the public commitment to a secret polynomial f of degree t-1:
   commits[j] = base * a_j. Commitments add homomorphically, so the sum of two
   PubPolys commits to the sum of the underlying polynomials. */

#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PubPoly<C: AffineCurve> {
    pub base: C,           // base point the coefficients are committed under
    pub commits: Vec<C>,   // committed coefficients, free term first
}

impl<C: AffineCurve> PubPoly<C> {

    // Commits to the first t coefficients of coeffs. Missing coefficients
    // (trimmed zeros) are committed as the identity.
    pub fn commit(base: C, coeffs: &[Scalar<C>], t: usize) -> Self {
        let commits = (0..t)
            .map(|j| match coeffs.get(j) {
                Some(a) => base.mul(a.into_repr()).into_affine(),
                None => C::zero(),
            })
            .collect();

        Self { base, commits }
    }

    // Zero polynomial of t coefficients, the accumulator for aggregation.
    pub fn init_null(suite: &Suite<C>, t: usize, base: C) -> Self {
        Self { base, commits: vec![suite.zero(); t] }
    }

    pub fn threshold(&self) -> usize {
        self.commits.len()
    }

    pub fn base(&self) -> C {
        self.base
    }

    pub fn commits(&self) -> &[C] {
        &self.commits
    }

    // Commitment to f(0). For an aggregate polynomial this is the joint public key.
    pub fn free_coeff(&self) -> C {
        self.commits.first().copied().unwrap_or_else(C::zero)
    }

    fn ensure_compatible(&self, other: &Self) -> Result<(), VSSError> {
        if self.commits.len() != other.commits.len() {
            return Err(VSSError::MismatchedDegree(self.commits.len(), other.commits.len()));
        }
        if self.base != other.base {
            return Err(VSSError::MismatchedBase);
        }
        Ok(())
    }

    // Coefficient-wise sum of two commitments.
    pub fn add(&self, other: &Self) -> Result<Self, VSSError> {
        let mut sum = self.clone();
        sum.add_assign(other)?;
        Ok(sum)
    }

    pub fn add_assign(&mut self, other: &Self) -> Result<(), VSSError> {
        self.ensure_compatible(other)?;

        for (a, b) in self.commits.iter_mut().zip(other.commits.iter()) {
            let mut sum = a.into_projective();
            sum.add_assign_mixed(b);
            *a = sum.into_affine();
        }

        Ok(())
    }

    // Commitment to f(index + 1), i.e. sum_j commits[j] * x^j.
    pub fn eval(&self, index: usize) -> C {
        let x = eval_point::<C>(index);
        let mut power = Scalar::<C>::one();
        let mut sum = C::Projective::zero();

        for commit in self.commits.iter() {
            sum += commit.mul(power.into_repr());
            power *= x;
        }

        sum.into_affine()
    }

    // Feldman check of a share against the commitment. A false result means the
    // share must not be trusted.
    pub fn check(&self, index: usize, share: &Scalar<C>) -> bool {
        self.eval(index) == self.base.mul(share.into_repr()).into_affine()
    }
}


// Lagrange coefficient of points[j] for interpolation at 0, over x = index + 1.
fn lagrange_coefficient<C: AffineCurve>(indices: &[usize], j: usize) -> Result<Scalar<C>, VSSError> {
    let x_j = eval_point::<C>(indices[j]);
    let mut prod = Scalar::<C>::one();

    for (k, index) in indices.iter().enumerate() {
        if k != j {
            let x_k = eval_point::<C>(*index);
            let denom = (x_k - x_j)
                .inverse()
                .ok_or(VSSError::DuplicateShareIndex(*index))?;
            prod *= x_k * denom;
        }
    }

    Ok(prod)
}


// Utility function recovering f(0) from at least t (index, share) pairs.
// Only the first t pairs are used.
pub fn recover_secret<C: AffineCurve>(
    shares: &[(usize, Scalar<C>)],
    t: usize,
) -> Result<Scalar<C>, VSSError> {
    if shares.len() < t {
        return Err(VSSError::InsufficientShares(shares.len(), t));
    }

    let indices = shares[..t].iter().map(|(i, _)| *i).collect::<Vec<_>>();
    let mut secret = Scalar::<C>::zero();

    for (j, (_, share)) in shares[..t].iter().enumerate() {
        secret += lagrange_coefficient::<C>(&indices, j)? * share;
    }

    Ok(secret)
}


// Utility function recovering base * f(0) from at least t committed evaluations.
pub fn recover_commit<C: AffineCurve>(
    points: &[(usize, C)],
    t: usize,
) -> Result<C, VSSError> {
    if points.len() < t {
        return Err(VSSError::InsufficientShares(points.len(), t));
    }

    let indices = points[..t].iter().map(|(i, _)| *i).collect::<Vec<_>>();
    let mut sum = C::Projective::zero();

    for (j, (_, point)) in points[..t].iter().enumerate() {
        sum += point.mul(lagrange_coefficient::<C>(&indices, j)?.into_repr());
    }

    Ok(sum.into_affine())
}


/* Unit tests: */

#[cfg(test)]
mod test {
    use crate::{
        signature::utils::tests::check_serialization,
        vss::{
            errors::VSSError,
            poly::{eval_point, recover_commit, recover_secret, Polynomial, PubPoly},
            suite::Suite,
        },
        Scalar,
    };

    use ark_bls12_381::G1Affine as C;
    use ark_ec::{AffineCurve, ProjectiveCurve};
    use ark_ff::{PrimeField, UniformRand, Zero};
    use ark_poly::{Polynomial as Poly, UVPolynomial};

    use rand::{thread_rng, Rng};

    const MIN_T: usize = 1;
    const MAX_T: usize = 20;

    fn random_pub_poly<R: Rng>(rng: &mut R, t: usize) -> (Polynomial<C>, PubPoly<C>) {
        let suite = Suite::<C>::setup();
        let poly = Polynomial::<C>::rand(t - 1, rng);
        let pub_poly = PubPoly::commit(suite.base(), &poly.coeffs, t);
        (poly, pub_poly)
    }

    #[test]
    fn test_check_valid_shares() {
        let rng = &mut thread_rng();
        let t = rng.gen_range(MIN_T, MAX_T);
        let (poly, pub_poly) = random_pub_poly(rng, t);

        assert_eq!(pub_poly.threshold(), t);
        for i in 0..(t + 3) {
            let share = poly.evaluate(&eval_point::<C>(i));
            assert!(pub_poly.check(i, &share));
        }
    }

    #[test]
    fn test_check_rejects_wrong_share() {
        let rng = &mut thread_rng();
        let (poly, pub_poly) = random_pub_poly(rng, 4);

        let share = poly.evaluate(&eval_point::<C>(2));
        assert!(!pub_poly.check(1, &share));
        assert!(!pub_poly.check(2, &(share + Scalar::<C>::from(1u64))));
    }

    #[test]
    fn test_check_rejects_tampered_coefficient() {
        let rng = &mut thread_rng();
        let (poly, mut pub_poly) = random_pub_poly(rng, 3);

        pub_poly.commits[1] = pub_poly.base.mul(Scalar::<C>::rand(rng).into_repr()).into_affine();
        for i in 0..3 {
            assert!(!pub_poly.check(i, &poly.evaluate(&eval_point::<C>(i))));
        }
    }

    #[test]
    fn test_add_is_homomorphic() {
        let rng = &mut thread_rng();
        let (f, pf) = random_pub_poly(rng, 5);
        let (g, pg) = random_pub_poly(rng, 5);

        let sum = pf.add(&pg).unwrap();
        for i in 0..5 {
            let x = eval_point::<C>(i);
            assert!(sum.check(i, &(f.evaluate(&x) + g.evaluate(&x))));
        }
    }

    #[test]
    fn test_add_to_null_is_identity() {
        let rng = &mut thread_rng();
        let suite = Suite::<C>::setup();
        let (_, p) = random_pub_poly(rng, 3);

        let mut acc = PubPoly::init_null(&suite, 3, suite.base());
        assert!(acc.commits.iter().all(|c| c.is_zero()));
        acc.add_assign(&p).unwrap();
        assert_eq!(acc, p);
    }

    #[test]
    fn test_add_mismatched_degree() {
        let rng = &mut thread_rng();
        let (_, p) = random_pub_poly(rng, 3);
        let (_, q) = random_pub_poly(rng, 4);

        match p.add(&q) {
            Err(VSSError::MismatchedDegree(3, 4)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_add_mismatched_base() {
        let rng = &mut thread_rng();
        let (_, p) = random_pub_poly(rng, 3);
        let mut q = p.clone();
        q.base = q.base.mul(Scalar::<C>::from(2u64).into_repr()).into_affine();

        assert!(matches!(p.add(&q), Err(VSSError::MismatchedBase)));
    }

    #[test]
    fn test_recover_secret() {
        let rng = &mut thread_rng();
        let t = rng.gen_range(MIN_T, MAX_T);
        let (poly, pub_poly) = random_pub_poly(rng, t);

        // Any t indices reconstruct the free coefficient.
        let shares = (0..t)
            .map(|j| 2 * j + 1)
            .map(|i| (i, poly.evaluate(&eval_point::<C>(i))))
            .collect::<Vec<_>>();
        let secret = recover_secret::<C>(&shares, t).unwrap();

        assert_eq!(secret, poly.coeffs[0]);
        assert_eq!(pub_poly.base.mul(secret.into_repr()).into_affine(), pub_poly.free_coeff());
    }

    #[test]
    fn test_recover_commit() {
        let rng = &mut thread_rng();
        let t = 4;
        let (_, pub_poly) = random_pub_poly(rng, t);

        let points = [5, 0, 7, 2]
            .iter()
            .map(|i| (*i, pub_poly.eval(*i)))
            .collect::<Vec<_>>();

        assert_eq!(recover_commit::<C>(&points, t).unwrap(), pub_poly.free_coeff());
    }

    #[test]
    fn test_recover_insufficient_shares() {
        let shares = vec![(0, Scalar::<C>::from(3u64))];
        assert!(matches!(
            recover_secret::<C>(&shares, 2),
            Err(VSSError::InsufficientShares(1, 2))
        ));
    }

    #[test]
    fn test_recover_duplicate_index() {
        let shares = vec![(1, Scalar::<C>::from(3u64)), (1, Scalar::<C>::from(4u64))];
        assert!(matches!(
            recover_secret::<C>(&shares, 2),
            Err(VSSError::DuplicateShareIndex(1))
        ));
    }

    #[test]
    fn test_serialization() {
        let rng = &mut thread_rng();
        let (_, pub_poly) = random_pub_poly(rng, 4);
        check_serialization(pub_poly);
    }
}
